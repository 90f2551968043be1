//! Grid module - the bordered playfield
//!
//! The grid is a 20x12 array: an 18x10 interior framed by a one-cell border.
//! Border cells are written once at construction and never touched by the
//! game again. Coordinates are `(row, col)` on the full array, row 0 at the top.

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{Cell, Shape, BOARD_HEIGHT, BOARD_WIDTH, BORDER_SIZE, FIELD_HEIGHT, FIELD_WIDTH};

const ROWS: usize = FIELD_HEIGHT as usize;
const COLS: usize = FIELD_WIDTH as usize;

/// First and last interior row/column
const TOP: i8 = BORDER_SIZE as i8;
const BOTTOM: i8 = (BORDER_SIZE + BOARD_HEIGHT) as i8 - 1;
const LEFT: i8 = BORDER_SIZE as i8;
const RIGHT: i8 = (BORDER_SIZE + BOARD_WIDTH) as i8 - 1;

/// Upper bound on rows removed by one `clear_lines` call
pub const MAX_CLEARED: usize = BOARD_HEIGHT as usize;

/// Rows removed by one `clear_lines` call, in the order they were removed
pub type ClearedRows = ArrayVec<i8, MAX_CLEARED>;

/// The playfield: bordered cell array plus the lines-cleared counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
    lines_cleared: u32,
}

impl Grid {
    /// Create a grid with an empty interior and the border frame in place
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if Self::is_frame(r as i8, c as i8) {
                    *cell = Cell::Border;
                }
            }
        }
        Self {
            cells,
            lines_cleared: 0,
        }
    }

    fn is_frame(row: i8, col: i8) -> bool {
        !(TOP..=BOTTOM).contains(&row) || !(LEFT..=RIGHT).contains(&col)
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Result<(usize, usize), GridError> {
        if row < 0 || row >= FIELD_HEIGHT as i8 || col < 0 || col >= FIELD_WIDTH as i8 {
            return Err(GridError::OutOfRange { row, col });
        }
        Ok((row as usize, col as usize))
    }

    /// Empty the interior and zero the counter. The border is left alone.
    pub fn reset(&mut self) {
        for r in TOP..=BOTTOM {
            self.clear_row(r);
        }
        self.lines_cleared = 0;
    }

    /// Cell at `(row, col)`
    pub fn get(&self, row: i8, col: i8) -> Result<Cell, GridError> {
        let (r, c) = Self::index(row, col)?;
        Ok(self.cells[r][c])
    }

    /// Overwrite the cell at `(row, col)`
    ///
    /// Border cells are writable too; the engine never does that.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> Result<(), GridError> {
        let (r, c) = Self::index(row, col)?;
        self.cells[r][c] = cell;
        Ok(())
    }

    /// True iff `(row, col)` is inside the playable rectangle
    pub fn in_bounds_interior(&self, row: i8, col: i8) -> bool {
        (TOP..=BOTTOM).contains(&row) && (LEFT..=RIGHT).contains(&col)
    }

    /// A row is full when none of its interior cells is empty.
    ///
    /// Moving cells count as filled. Rows outside the interior are never full.
    pub fn is_row_full(&self, row: i8) -> bool {
        if !(TOP..=BOTTOM).contains(&row) {
            return false;
        }
        self.interior(row).iter().all(|cell| !cell.is_empty())
    }

    /// Remove every full row, shifting the rows above it down by one.
    ///
    /// Each removed row bumps the counter by one. After a shift the same row
    /// index is examined again, so stacked full rows are all removed.
    pub fn clear_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut row = TOP;
        while row <= BOTTOM {
            if !self.is_row_full(row) {
                row += 1;
                continue;
            }
            self.lines_cleared += 1;
            cleared.push(row);
            for k in (TOP + 1..=row).rev() {
                self.cells[k as usize] = self.cells[k as usize - 1];
            }
            self.clear_row(TOP);
        }
        cleared
    }

    /// Turn every moving cell back into an empty one; settled cells stay
    pub fn clear_moving(&mut self) {
        for r in TOP..=BOTTOM {
            for cell in self.interior_mut(r) {
                if cell.is_moving() {
                    *cell = Cell::Empty;
                }
            }
        }
    }

    /// Lines cleared since the last reset
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Read-only copy handed to the renderer
    pub fn render_snapshot(&self) -> Grid {
        self.clone()
    }

    /// Copy of this grid with the interior replaced by a two-shape checkerboard.
    ///
    /// This is the picture shown while the game-over pause runs.
    pub fn checkerboard(&self) -> Grid {
        let mut board = self.clone();
        for r in TOP..=BOTTOM {
            for c in LEFT..=RIGHT {
                let shape = if (r + c) & 1 == 0 { Shape::O } else { Shape::Z };
                board.cells[r as usize][c as usize] = Cell::Settled(shape);
            }
        }
        board
    }

    /// Rows of the full field, border included, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// Number of interior cells that are not empty
    pub fn filled_cells(&self) -> usize {
        (TOP..=BOTTOM)
            .map(|r| self.interior(r).iter().filter(|c| !c.is_empty()).count())
            .sum()
    }

    fn interior(&self, row: i8) -> &[Cell] {
        &self.cells[row as usize][LEFT as usize..=RIGHT as usize]
    }

    fn interior_mut(&mut self, row: i8) -> &mut [Cell] {
        &mut self.cells[row as usize][LEFT as usize..=RIGHT as usize]
    }

    fn clear_row(&mut self, row: i8) {
        self.interior_mut(row).fill(Cell::Empty);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
