//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four game buttons and turns key
//! presses into per-tick edge signals. Nothing here knows about the game
//! rules; the tick loop only ever sees [`ButtonEdges`](crate::types::ButtonEdges).

pub mod latch;
pub mod map;

pub use button_tetris_types as types;

pub use latch::ButtonLatch;
pub use map::{button_for_key, should_quit};
