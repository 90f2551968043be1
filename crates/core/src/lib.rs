//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and nothing else. It has **no I/O**:
//! input edges, time and rendering belong to the callers.
//!
//! - **Deterministic**: the shape source is injected, so a fixed seed or a
//!   scripted sequence replays the same game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Allocation-free**: the grid is a fixed array, cleared rows come back in
//!   an `ArrayVec`
//!
//! # Module Structure
//!
//! - [`grid`]: bordered 20x12 field, line clearing and the lines counter
//! - [`pieces`]: the per-shape, per-orientation offset table
//! - [`piece`]: the falling piece and its absolute cells
//! - [`game_state`]: spawn, move, rotate, drops and the game-over state
//! - [`rng`]: injected shape sources
//! - [`snapshot`]: the frame handed to renderers
//!
//! # Game Rules
//!
//! - A new piece appears at row 1, column 4 in orientation 0, shape drawn
//!   uniformly from the seven tetrominoes
//! - Moves and rotations that would leave the interior or overlap a settled
//!   cell are rejected without any change
//! - Rotation turns in place (no wall kicks)
//! - A piece that cannot move down settles; full rows are removed; the next
//!   piece spawns. If it does not fit, the game is over.
//!
//! # Example
//!
//! ```
//! use button_tetris_core::{GameEngine, SimpleRng};
//! use button_tetris_types::Progress;
//!
//! let mut game = GameEngine::new(SimpleRng::new(12345));
//!
//! game.move_right();
//! game.rotate();
//! assert_eq!(game.hard_drop(), Progress::Continue);
//!
//! assert_eq!(game.pieces_spawned(), 2);
//! assert_eq!(game.lines_cleared(), 0);
//! ```

pub mod error;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use button_tetris_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use game_state::{Command, GameEngine, GameStatus, LockEvent};
pub use grid::{ClearedRows, Grid};
pub use piece::{occupied_cells, ActivePiece, OccupiedCells};
pub use pieces::{offsets, orientation_period, PieceShape};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng};
pub use snapshot::GameSnapshot;
