//! Error types for sparse matrix parsing and arithmetic

use std::path::PathBuf;

use thiserror::Error;

use crate::operation::Operation;

/// Result type alias using this crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or combining matrices
#[derive(Error, Debug)]
pub enum Error {
    /// A non-blank line is neither `rows=`, `cols=` nor a `(row, col, value)` triple
    #[error("Input file has wrong format")]
    Format,

    /// Operand shapes are incompatible for the requested operation
    #[error("{}", dimension_message(.op))]
    Dimension {
        /// The operation that was attempted
        op: Operation,
        /// Shape of the left operand as (rows, cols)
        lhs: (u32, u32),
        /// Shape of the right operand as (rows, cols)
        rhs: (u32, u32),
    },

    /// The text source could not be opened
    #[error("Matrix source not found: {}", .path.display())]
    SourceNotFound {
        /// The location that was tried
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already opened source failed
    #[error("Failed to read matrix source: {0}")]
    Io(#[from] std::io::Error),

    /// A cell value left the i64 range
    #[error("Integer overflow during {op}")]
    Overflow {
        /// The operation that overflowed
        op: Operation,
    },
}

fn dimension_message(op: &Operation) -> &'static str {
    match op {
        Operation::Add => "Matrix dimensions must match for addition.",
        Operation::Subtract => "Matrix dimensions must match for subtraction.",
        Operation::Multiply => "Matrix dimensions incompatible for multiplication.",
    }
}
