//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the game core, the tick loop, the input mapping and the renderer alike.
//!
//! # Field Dimensions
//!
//! The playfield is a 10x18 interior surrounded by a one-cell border frame:
//!
//! - **Interior**: 10 columns, 18 rows
//! - **Full field**: 12 columns, 20 rows (border included)
//! - **Spawn anchor**: row 1, column 4 (first interior row, roughly centred)
//!
//! All `(row, col)` coordinates address the full bordered field, so the first
//! interior cell is `(1, 1)`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 10 | Poll interval of the game loop |
//! | `GRAVITY_MS` | 500 | Gravity interval |
//! | `GAME_OVER_PAUSE_MS` | 1000 | Blocking pause after game over |
//! | `GAME_OVER_FLASHES` | 4 | Frames shown during that pause |
//!
//! # Examples
//!
//! ```
//! use button_tetris_types::{Cell, Shape, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let shape = Shape::from_id(3).unwrap();
//! assert_eq!(shape, Shape::T);
//!
//! let cell = Cell::Moving(shape);
//! assert_eq!(cell.settled(), Cell::Settled(Shape::T));
//!
//! assert_eq!(FIELD_WIDTH, 12);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Interior width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Interior height in cells (18 rows)
pub const BOARD_HEIGHT: u8 = 18;

/// Thickness of the border frame around the interior
pub const BORDER_SIZE: u8 = 1;

/// Full field width including both border columns
pub const FIELD_WIDTH: u8 = BOARD_WIDTH + 2 * BORDER_SIZE;

/// Full field height including both border rows
pub const FIELD_HEIGHT: u8 = BOARD_HEIGHT + 2 * BORDER_SIZE;

/// Anchor row of a freshly spawned piece
pub const SPAWN_ROW: i8 = BORDER_SIZE as i8;

/// Anchor column of a freshly spawned piece
pub const SPAWN_COL: i8 = 4;

/// Poll interval of the game loop in milliseconds
pub const TICK_MS: u64 = 10;

/// Gravity interval: one soft drop per 500ms
pub const GRAVITY_MS: u64 = 500;

/// Length of the blocking pause after game over
pub const GAME_OVER_PAUSE_MS: u64 = 1000;

/// Number of frames the game-over pause flashes through
pub const GAME_OVER_FLASHES: u64 = 4;

/// The seven tetromino shapes
///
/// The numeric id doubles as the colour index of the renderer:
/// - **O** (0): 2x2 square
/// - **Z** (1): curve to the right
/// - **S** (2): curve to the left
/// - **T** (3): nose
/// - **I** (4): straight line
/// - **J** (5): L with the foot on the right
/// - **L** (6): L with the foot on the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    O,
    Z,
    S,
    T,
    I,
    J,
    L,
}

impl Shape {
    /// All shapes in id order
    pub const ALL: [Shape; 7] = [
        Shape::O,
        Shape::Z,
        Shape::S,
        Shape::T,
        Shape::I,
        Shape::J,
        Shape::L,
    ];

    /// Number of distinct shapes
    pub const COUNT: u8 = 7;

    /// Shape id in `0..7`
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look a shape up by id
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Single uppercase letter, used by the event log and the side panel
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::O => "O",
            Shape::Z => "Z",
            Shape::S => "S",
            Shape::T => "T",
            Shape::I => "I",
            Shape::J => "J",
            Shape::L => "L",
        }
    }
}

/// Rotation index of a piece
///
/// The raw index only means something together with a shape: geometry lookup
/// reduces it modulo that shape's orientation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Orientation(pub u8);

impl Orientation {
    pub const SPAWN: Orientation = Orientation(0);

    pub fn index(self) -> u8 {
        self.0
    }

    /// Next rotation, wrapped into `0..period`
    pub fn next(self, period: u8) -> Self {
        Orientation((self.0 % period + 1) % period)
    }
}

/// A single field cell
///
/// - `Empty`: free interior cell
/// - `Border`: the immutable frame
/// - `Settled(shape)`: left behind by a piece that finished falling
/// - `Moving(shape)`: occupied by the piece that is still falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Border,
    Settled(Shape),
    Moving(Shape),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_moving(self) -> bool {
        matches!(self, Cell::Moving(_))
    }

    /// Shape of a piece cell, `None` for empty and border cells
    pub fn shape(self) -> Option<Shape> {
        match self {
            Cell::Settled(shape) | Cell::Moving(shape) => Some(shape),
            Cell::Empty | Cell::Border => None,
        }
    }

    /// The same cell with the moving tag dropped
    pub fn settled(self) -> Self {
        match self {
            Cell::Moving(shape) => Cell::Settled(shape),
            other => other,
        }
    }
}

/// Outcome of operations that may end the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A piece is falling; play goes on
    Continue,
    /// The next piece did not fit at the spawn anchor
    GameOver,
}

/// The four physical push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Rotate,
    Left,
    Right,
    Drop,
}

/// Edge signals for one tick: `true` exactly in the tick a button went from
/// released to pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonEdges {
    pub rotate: bool,
    pub left: bool,
    pub right: bool,
    pub drop: bool,
}

impl ButtonEdges {
    pub const NONE: ButtonEdges = ButtonEdges {
        rotate: false,
        left: false,
        right: false,
        drop: false,
    };

    /// Edges with only `button` pressed
    pub fn only(button: Button) -> Self {
        let mut edges = Self::NONE;
        edges.set(button);
        edges
    }

    pub fn set(&mut self, button: Button) {
        match button {
            Button::Rotate => self.rotate = true,
            Button::Left => self.left = true,
            Button::Right => self.right = true,
            Button::Drop => self.drop = true,
        }
    }

    pub fn any(&self) -> bool {
        self.rotate || self.left || self.right || self.drop
    }
}
