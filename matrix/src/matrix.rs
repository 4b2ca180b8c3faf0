use serde::{Deserialize, Serialize};

use crate::entry::MatrixEntry;

/// A `rows x cols` integer matrix that stores only its non-zero cells.
///
/// Entries are kept in insertion order. There is at most one entry per
/// coordinate and no entry ever holds `0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawMatrix")]
pub struct SparseMatrix {
    pub(crate) rows: u32,
    pub(crate) cols: u32,
    pub(crate) entries: Vec<MatrixEntry>,
}

/// Untrusted wire shape, normalized through `set` on the way in.
#[derive(Deserialize)]
struct RawMatrix {
    rows: u32,
    cols: u32,
    #[serde(default)]
    entries: Vec<MatrixEntry>,
}

impl From<RawMatrix> for SparseMatrix {
    fn from(raw: RawMatrix) -> Self {
        let mut matrix = SparseMatrix::new(raw.rows, raw.cols);
        for e in raw.entries {
            matrix.set(e.row, e.col, e.value);
        }
        matrix
    }
}

impl SparseMatrix {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in insertion order.
    pub fn entries(&self) -> &[MatrixEntry] {
        &self.entries
    }

    fn position(&self, row: i64, col: i64) -> Option<usize> {
        self.entries.iter().position(|e| e.row == row && e.col == col)
    }

    /// Value at `(row, col)`, or `0` when nothing is stored there.
    pub fn get(&self, row: i64, col: i64) -> i64 {
        self.position(row, col).map_or(0, |i| self.entries[i].value)
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// A zero value removes any existing entry, so zeros are never stored.
    pub fn set(&mut self, row: i64, col: i64, value: i64) {
        match (self.position(row, col), value) {
            (Some(i), 0) => {
                self.entries.remove(i);
            }
            (Some(i), v) => self.entries[i].value = v,
            (None, 0) => {}
            (None, v) => self.entries.push(MatrixEntry::new(row, col, v)),
        }
    }

    /// Stored entries whose coordinates lie outside the declared shape,
    /// negative coordinates included.
    ///
    /// Loading never rejects these; callers decide whether they matter.
    pub fn out_of_bounds(&self) -> impl Iterator<Item = &MatrixEntry> + '_ {
        let in_range = |index: i64, len: u32| (0..i64::from(len)).contains(&index);
        self.entries
            .iter()
            .filter(move |e| !in_range(e.row, self.rows) || !in_range(e.col, self.cols))
    }
}

/// Two matrices are equal when their shapes match and they store the same
/// cells, whatever the insertion order.
impl PartialEq for SparseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.nnz() == other.nnz()
            && self
                .entries
                .iter()
                .all(|e| other.get(e.row, e.col) == e.value)
    }
}

impl Eq for SparseMatrix {}
