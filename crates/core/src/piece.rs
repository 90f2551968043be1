//! The falling piece: shape, orientation and anchor.

use crate::pieces::{offsets, orientation_period};
use crate::types::{Orientation, Shape, SPAWN_COL, SPAWN_ROW};

/// Absolute `(row, col)` of the four cells a piece occupies
pub type OccupiedCells = [(i8, i8); 4];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub orientation: Orientation,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// A new piece at the spawn anchor in orientation 0
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            orientation: Orientation::SPAWN,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// Absolute cells covered by this piece, `None` when a cell is not
    /// representable
    pub fn cells(&self) -> Option<OccupiedCells> {
        occupied_cells(self.shape, self.orientation, self.row, self.col)
    }

    /// The same piece displaced by `(dr, dc)`, `None` on coordinate overflow
    pub fn shifted(&self, dr: i8, dc: i8) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(dr)?,
            col: self.col.checked_add(dc)?,
            ..*self
        })
    }

    /// The same piece turned to its next orientation
    pub fn rotated(&self) -> Self {
        Self {
            orientation: self.orientation.next(orientation_period(self.shape)),
            ..*self
        }
    }
}

/// Anchor plus the geometry offsets of `shape` in `orientation`.
///
/// Returns `None` when a cell would fall outside the `i8` coordinate range.
pub fn occupied_cells(
    shape: Shape,
    orientation: Orientation,
    row: i8,
    col: i8,
) -> Option<OccupiedCells> {
    let mut cells = [(0, 0); 4];
    for (cell, (dr, dc)) in cells.iter_mut().zip(offsets(shape, orientation)) {
        *cell = (row.checked_add(dr)?, col.checked_add(dc)?);
    }
    Some(cells)
}
