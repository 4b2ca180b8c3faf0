use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;
use crate::operation::Operation;

impl SparseMatrix {
    /// Elementwise sum. Both operands must have the same shape.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Add, i64::checked_add)
    }

    /// Elementwise difference `self - other`. Both operands must have the same shape.
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Subtract, i64::checked_sub)
    }

    fn combine(
        &self,
        other: &SparseMatrix,
        op: Operation,
        f: fn(i64, i64) -> Option<i64>,
    ) -> Result<SparseMatrix> {
        if self.shape() != other.shape() {
            return Err(Error::Dimension {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut result = SparseMatrix::new(self.rows, self.cols);
        for e in &self.entries {
            result.set(e.row, e.col, e.value);
        }

        // Cells that cancel out are pruned by `set`.
        for e in &other.entries {
            let current = result.get(e.row, e.col);
            let value = f(current, e.value).ok_or(Error::Overflow { op })?;
            result.set(e.row, e.col, value);
        }

        Ok(result)
    }
}
