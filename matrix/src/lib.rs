//! Sparse integer matrices stored as `(row, col, value)` triples.
//!
//! Only non-zero cells are stored. Every cell that has no entry reads as `0`,
//! and writing `0` into a cell removes its entry.

mod arith;
mod entry;
pub mod error;
mod format;
mod matrix;
mod multiply;
mod operation;

pub use entry::MatrixEntry;
pub use error::{Error, Result};
pub use matrix::SparseMatrix;
pub use operation::Operation;
