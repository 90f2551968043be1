//! Terminal "game renderer" module.
//!
//! The renderer collaborator of the game: it receives a finished
//! [`GameSnapshot`](crate::core::GameSnapshot), maps every cell through a
//! [`GlyphTable`] and pushes the result to the terminal. It never changes game
//! state.
//!
//! - [`fb`]: framebuffer of styled glyphs
//! - [`glyphs`]: per-shape colours, border and falling-piece entries
//! - [`game_view`]: snapshot to framebuffer (pure, testable)
//! - [`renderer`]: framebuffer to terminal via `crossterm`

pub mod fb;
pub mod game_view;
pub mod glyphs;
pub mod renderer;

pub use button_tetris_core as core;
pub use button_tetris_types as types;

pub use fb::{FrameBuffer, Glyph};
pub use game_view::{GameView, Viewport};
pub use glyphs::GlyphTable;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
