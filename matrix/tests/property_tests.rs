//! Property-based tests for sparse-matrix.
//!
//! Key invariants:
//! - get after set returns the value written, and zero is never stored
//! - text serialization round-trips regardless of entry order
//! - addition commutes
//! - A - A has no stored entries
//! - mismatched shapes fail with a dimension error

use proptest::prelude::*;
use sparse_matrix::{Error, SparseMatrix};

const MAX_DIM: u32 = 6;

fn cells(rows: u32, cols: u32) -> impl Strategy<Value = Vec<(i64, i64, i64)>> {
    let (rows, cols) = (i64::from(rows), i64::from(cols));
    prop::collection::vec((0..rows, 0..cols, -50i64..50), 0..20)
}

fn matrix_with_shape(rows: u32, cols: u32) -> impl Strategy<Value = SparseMatrix> {
    cells(rows, cols).prop_map(move |cells| {
        cells.into_iter().fold(SparseMatrix::new(rows, cols), |mut m, (r, c, v)| {
            m.set(r, c, v);
            m
        })
    })
}

fn matrix() -> impl Strategy<Value = SparseMatrix> {
    (1..=MAX_DIM, 1..=MAX_DIM).prop_flat_map(|(rows, cols)| matrix_with_shape(rows, cols))
}

fn same_shape_pair() -> impl Strategy<Value = (SparseMatrix, SparseMatrix)> {
    (1..=MAX_DIM, 1..=MAX_DIM).prop_flat_map(|(rows, cols)| {
        (matrix_with_shape(rows, cols), matrix_with_shape(rows, cols))
    })
}

proptest! {
    /// Writing a cell and reading it back yields the written value.
    #[test]
    fn set_then_get(m in matrix(), r in -2i64..8, c in -2i64..8, v in -50i64..50) {
        let mut m = m;
        m.set(r, c, v);
        prop_assert_eq!(m.get(r, c), v);
        prop_assert!(m.entries().iter().all(|e| e.value != 0));
    }

    /// Entries are unique per coordinate and never zero.
    #[test]
    fn store_stays_sparse(m in matrix()) {
        let mut coords: Vec<_> = m.entries().iter().map(|e| e.coord()).collect();
        coords.sort_unstable();
        coords.dedup();
        prop_assert_eq!(coords.len(), m.nnz());
        prop_assert!(m.entries().iter().all(|e| e.value != 0));
    }

    /// Serializing then parsing reproduces the matrix.
    #[test]
    fn text_round_trip(m in matrix()) {
        let text = m.to_string();
        let parsed: SparseMatrix = text.parse().unwrap();
        prop_assert_eq!(parsed, m);
    }

    /// Reversed entry lines parse to the same matrix.
    #[test]
    fn entry_order_is_irrelevant(m in matrix()) {
        let text = m.to_string();
        let mut lines: Vec<&str> = text.lines().collect();
        lines[2..].reverse();
        let parsed: SparseMatrix = lines.join("\n").parse().unwrap();
        prop_assert_eq!(parsed, m);
    }

    #[test]
    fn addition_commutes((a, b) in same_shape_pair()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn self_subtraction_cancels(a in matrix()) {
        let diff = a.subtract(&a).unwrap();
        prop_assert!(diff.is_empty());
        prop_assert_eq!(diff.shape(), a.shape());
    }

    /// Adding the difference back restores the left operand.
    #[test]
    fn subtract_then_add((a, b) in same_shape_pair()) {
        let restored = a.subtract(&b).unwrap().add(&b).unwrap();
        prop_assert_eq!(restored, a);
    }

    /// Every product cell matches the dense row-by-column sum.
    #[test]
    fn product_matches_dense(
        (a, b) in (1..=MAX_DIM, 1..=MAX_DIM, 1..=MAX_DIM)
            .prop_flat_map(|(n, k, m)| (matrix_with_shape(n, k), matrix_with_shape(k, m)))
    ) {
        let c = a.multiply(&b).unwrap();
        prop_assert_eq!(c.shape(), (a.rows(), b.cols()));
        for i in 0..i64::from(a.rows()) {
            for l in 0..i64::from(b.cols()) {
                let dense: i64 = (0..i64::from(a.cols()))
                    .map(|j| a.get(i, j) * b.get(j, l))
                    .sum();
                prop_assert_eq!(c.get(i, l), dense);
            }
        }
    }

    #[test]
    fn mismatched_shapes_fail(a in matrix(), b in matrix()) {
        if a.shape() != b.shape() {
            prop_assert!(matches!(a.add(&b), Err(Error::Dimension { .. })), "expected dimension error from add");
            prop_assert!(matches!(a.subtract(&b), Err(Error::Dimension { .. })), "expected dimension error from subtract");
        }
        if a.cols() != b.rows() {
            prop_assert!(matches!(a.multiply(&b), Err(Error::Dimension { .. })), "expected dimension error from multiply");
        }
    }
}
