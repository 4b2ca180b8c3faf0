use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;
use crate::operation::Operation;

impl SparseMatrix {
    /// Matrix product `self * other`.
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.cols != other.rows {
            return Err(Error::Dimension {
                op: Operation::Multiply,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        // Group the right operand's entries by row so each left entry (i, j)
        // only visits the entries (j, l) it pairs with.
        let mut other_rows: HashMap<i64, Vec<(i64, i64)>> = HashMap::new();
        for e in &other.entries {
            other_rows.entry(e.row).or_default().push((e.col, e.value));
        }

        let overflow = || Error::Overflow {
            op: Operation::Multiply,
        };

        let mut result = SparseMatrix::new(self.rows, other.cols);
        for a in &self.entries {
            let Some(row) = other_rows.get(&a.col) else {
                continue;
            };
            for &(col, value) in row {
                let product = a.value.checked_mul(value).ok_or_else(overflow)?;
                let sum = result
                    .get(a.row, col)
                    .checked_add(product)
                    .ok_or_else(overflow)?;
                result.set(a.row, col, sum);
            }
        }

        Ok(result)
    }
}
