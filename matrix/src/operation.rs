use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::matrix::SparseMatrix;

/// One of the binary matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Runs the operation on `lhs` and `rhs`.
    pub fn apply(self, lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Self::Add => lhs.add(rhs),
            Self::Subtract => lhs.subtract(rhs),
            Self::Multiply => lhs.multiply(rhs),
        }
    }

    /// Noun used in result headings, e.g. "Addition".
    pub fn title(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Subtract => write!(f, "subtract"),
            Self::Multiply => write!(f, "multiply"),
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "add" | "addition" => Ok(Self::Add),
            "2" | "sub" | "subtract" | "subtraction" => Ok(Self::Subtract),
            "3" | "mul" | "multiply" | "multiplication" => Ok(Self::Multiply),
            other => Err(format!(
                "unknown operation '{}', expected add, subtract or multiply (1/2/3)",
                other
            )),
        }
    }
}
