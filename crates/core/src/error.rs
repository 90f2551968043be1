//! Error types of the game core.

/// Grid access outside the full bordered field.
///
/// Legal moves never produce this; seeing it means a caller broke the
/// addressing contract of [`Grid`](crate::Grid).
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the bordered field")]
    OutOfRange { row: i8, col: i8 },
}
