//! Tick-driven game loop (engine-facing).
//!
//! This crate sits between the pure game core and the outside world. Each
//! iteration the caller passes the current time and the button edges seen
//! since the last iteration; the loop turns them into engine commands and runs
//! gravity. It does no I/O and never sleeps: the game-over pause is handed back
//! to the caller as a list of frames to show.

pub mod game_loop;

pub use button_tetris_core as core;
pub use button_tetris_types as types;

pub use game_loop::{FlashFrame, GameLoop, LoopConfig, TickReport};
