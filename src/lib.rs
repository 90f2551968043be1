//! Button Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and adds the two pieces the
//! binary needs on top of them: environment [`config`] and the JSON-lines
//! [`event_log`].

pub use button_tetris_core as core;
pub use button_tetris_engine as engine;
pub use button_tetris_input as input;
pub use button_tetris_term as term;
pub use button_tetris_types as types;

pub mod config;
pub mod event_log;
