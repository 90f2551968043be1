//! Glyph and colour table for board cells.
//!
//! Colours are indexed by shape id (0..7); the border and the falling piece
//! have their own entries.

use crossterm::style::Color;

use crate::fb::Glyph;
use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    /// Foreground colour per shape id
    pub shape_colors: [Color; 7],
    /// Character of a settled cell
    pub block: char,
    /// Character of a cell of the falling piece
    pub moving_block: char,
    /// Background tint under the falling piece
    pub moving_bg: Color,
    pub border: Glyph,
    pub empty: Glyph,
    /// Terminal columns per board cell
    pub cell_width: u16,
}

const SHAPE_COLORS: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

impl GlyphTable {
    /// Block characters, two columns per cell.
    pub fn blocks() -> Self {
        Self {
            shape_colors: SHAPE_COLORS,
            block: '█',
            moving_block: '▓',
            moving_bg: Color::Reset,
            border: Glyph::plain('▒', Color::DarkGrey),
            empty: Glyph::plain(' ', Color::Reset),
            cell_width: 2,
        }
    }

    /// Plain ASCII as a serial console shows it: `X` blocks, `O` frame.
    pub fn serial() -> Self {
        Self {
            shape_colors: SHAPE_COLORS,
            block: 'X',
            moving_block: 'X',
            moving_bg: Color::Reset,
            border: Glyph::plain('O', Color::DarkGrey).bold(),
            empty: Glyph::plain(' ', Color::Reset),
            cell_width: 1,
        }
    }

    /// Glyph for one board cell
    pub fn glyph(&self, cell: Cell) -> Glyph {
        match cell {
            Cell::Empty => self.empty,
            Cell::Border => self.border,
            Cell::Settled(shape) => {
                Glyph::plain(self.block, self.shape_colors[shape.id() as usize]).bold()
            }
            Cell::Moving(shape) => {
                Glyph::plain(self.moving_block, self.shape_colors[shape.id() as usize])
                    .bold()
                    .on(self.moving_bg)
            }
        }
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::blocks()
    }
}
