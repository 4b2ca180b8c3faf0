use serde::{Deserialize, Serialize};

/// One stored, non-zero cell.
///
/// Coordinates are signed so that any integer triple in a source survives
/// loading; see [`SparseMatrix::out_of_bounds`](crate::SparseMatrix::out_of_bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub row: i64,
    pub col: i64,
    pub value: i64,
}

impl MatrixEntry {
    pub fn new(row: i64, col: i64, value: i64) -> Self {
        Self { row, col, value }
    }

    pub fn coord(&self) -> (i64, i64) {
        (self.row, self.col)
    }
}
