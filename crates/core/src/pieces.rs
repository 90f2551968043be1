//! Pieces module - tetromino geometry
//!
//! Every shape lists one 4-cell offset set per distinct orientation. The length
//! of that list is the shape's orientation period: 1 for the square, 2 for the
//! point-symmetric Z, S and I, 4 for T, J and L. Offsets are `(row, col)`
//! relative to the piece anchor, rows growing downwards.
//!
//! This table is the only place shape geometry is defined.

use crate::types::{Orientation, Shape};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

const O_SHAPES: [PieceShape; 1] = [[(0, 2), (0, 1), (1, 1), (1, 2)]];

const Z_SHAPES: [PieceShape; 2] = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

const S_SHAPES: [PieceShape; 2] = [
    [(1, 0), (0, 1), (1, 1), (0, 2)],
    [(-1, 1), (0, 1), (0, 2), (1, 2)],
];

const T_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (0, 2), (1, 1)],
    [(-1, 1), (0, 1), (1, 1), (0, 0)],
    [(0, 0), (0, 1), (0, 2), (-1, 1)],
    [(-1, 1), (0, 1), (1, 1), (0, 2)],
];

const I_SHAPES: [PieceShape; 2] = [
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 1), (1, 1), (2, 1), (3, 1)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(1, 0), (1, 1), (0, 1), (-1, 1)],
    [(-1, 0), (0, 0), (0, 1), (0, 2)],
    [(1, 1), (0, 1), (-1, 1), (-1, 2)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(1, 0), (0, 0), (0, 1), (0, 2)],
    [(-1, 1), (0, 1), (1, 1), (1, 2)],
    [(0, 0), (0, 1), (0, 2), (-1, 2)],
    [(-1, 0), (-1, 1), (0, 1), (1, 1)],
];

/// All distinct orientations of a shape, in rotation order
pub fn orientations(shape: Shape) -> &'static [PieceShape] {
    match shape {
        Shape::O => &O_SHAPES,
        Shape::Z => &Z_SHAPES,
        Shape::S => &S_SHAPES,
        Shape::T => &T_SHAPES,
        Shape::I => &I_SHAPES,
        Shape::J => &J_SHAPES,
        Shape::L => &L_SHAPES,
    }
}

/// Number of rotations before the shape repeats
pub fn orientation_period(shape: Shape) -> u8 {
    orientations(shape).len() as u8
}

/// Cell offsets of `shape` in `orientation`.
///
/// The orientation is wrapped into the shape's period first, so any value is
/// accepted.
pub fn offsets(shape: Shape, orientation: Orientation) -> PieceShape {
    let table = orientations(shape);
    table[orientation.index() as usize % table.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods() {
        assert_eq!(orientation_period(Shape::O), 1);
        assert_eq!(orientation_period(Shape::Z), 2);
        assert_eq!(orientation_period(Shape::S), 2);
        assert_eq!(orientation_period(Shape::I), 2);
        assert_eq!(orientation_period(Shape::T), 4);
        assert_eq!(orientation_period(Shape::J), 4);
        assert_eq!(orientation_period(Shape::L), 4);
    }

    #[test]
    fn test_every_entry_has_four_distinct_cells() {
        for shape in Shape::ALL {
            for cells in orientations(shape) {
                for i in 0..4 {
                    for j in i + 1..4 {
                        assert_ne!(cells[i], cells[j], "{:?} repeats a cell", shape);
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_entry_is_connected() {
        for shape in Shape::ALL {
            for cells in orientations(shape) {
                for &(r, c) in cells {
                    let touches = cells
                        .iter()
                        .any(|&(r2, c2)| (r - r2).abs() + (c - c2).abs() == 1);
                    assert!(touches, "{:?} has a detached cell", shape);
                }
            }
        }
    }

    #[test]
    fn test_orientations_of_a_shape_differ() {
        for shape in Shape::ALL {
            let table = orientations(shape);
            for i in 0..table.len() {
                for j in i + 1..table.len() {
                    let mut a = table[i];
                    let mut b = table[j];
                    a.sort();
                    b.sort();
                    assert_ne!(a, b, "{:?} orientations {} and {} coincide", shape, i, j);
                }
            }
        }
    }

    #[test]
    fn test_offsets_wrap_orientation() {
        assert_eq!(offsets(Shape::I, Orientation(2)), offsets(Shape::I, Orientation(0)));
        assert_eq!(offsets(Shape::I, Orientation(3)), offsets(Shape::I, Orientation(1)));
        assert_eq!(offsets(Shape::T, Orientation(5)), offsets(Shape::T, Orientation(1)));
        assert_eq!(offsets(Shape::O, Orientation(3)), offsets(Shape::O, Orientation(0)));
    }

    #[test]
    fn test_spawn_orientation_never_reaches_above_anchor() {
        for shape in Shape::ALL {
            let cells = offsets(shape, Orientation::SPAWN);
            assert!(cells.iter().all(|&(r, _)| r >= 0), "{:?}", shape);
        }
    }

    #[test]
    fn test_line_shapes() {
        assert_eq!(
            offsets(Shape::I, Orientation(0)),
            [(0, 0), (0, 1), (0, 2), (0, 3)]
        );
        assert_eq!(
            offsets(Shape::I, Orientation(1)),
            [(0, 1), (1, 1), (2, 1), (3, 1)]
        );
    }
}
