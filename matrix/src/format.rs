//! Line-oriented text format
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>, <col>, <value>)
//! ```
//!
//! Blank lines are ignored. `rows=`/`cols=` may appear anywhere and the last
//! occurrence wins. Any other line must be a parenthesized triple.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::entry::MatrixEntry;
use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

#[derive(Debug, PartialEq)]
enum Line {
    Blank,
    Rows(u32),
    Cols(u32),
    Entry(MatrixEntry),
}

fn parse_field<T: FromStr>(s: &str) -> Result<T> {
    s.trim().parse().map_err(|_| Error::Format)
}

fn parse_line(line: &str) -> Result<Line> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Line::Blank);
    }
    if let Some(n) = line.strip_prefix("rows=") {
        return parse_field(n).map(Line::Rows);
    }
    if let Some(n) = line.strip_prefix("cols=") {
        return parse_field(n).map(Line::Cols);
    }

    let inner = line
        .strip_prefix('(')
        .and_then(|l| l.strip_suffix(')'))
        .ok_or(Error::Format)?;
    let fields: Vec<&str> = inner.split(',').collect();
    match fields.as_slice() {
        [row, col, value] => Ok(Line::Entry(MatrixEntry::new(
            parse_field(row)?,
            parse_field(col)?,
            parse_field(value)?,
        ))),
        _ => Err(Error::Format),
    }
}

impl SparseMatrix {
    /// Parses the text format from any buffered reader.
    ///
    /// The first malformed line aborts the whole parse with [`Error::Format`].
    /// Coordinates outside the declared shape are accepted.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut matrix = SparseMatrix::default();
        for line in reader.lines() {
            match parse_line(&line?)? {
                Line::Blank => {}
                Line::Rows(n) => matrix.rows = n,
                Line::Cols(n) => matrix.cols = n,
                Line::Entry(e) => matrix.set(e.row, e.col, e.value),
            }
        }
        Ok(matrix)
    }

    /// Loads a matrix from a file in the text format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let matrix = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            rows = matrix.rows,
            cols = matrix.cols,
            nnz = matrix.nnz(),
            "loaded sparse matrix"
        );
        Ok(matrix)
    }

    /// Writes the text format, one line per stored entry in stored order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }
}

impl FromStr for SparseMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.rows)?;
        writeln!(f, "cols={}", self.cols)?;
        for e in &self.entries {
            writeln!(f, "({}, {}, {})", e.row, e.col, e.value)?;
        }
        Ok(())
    }
}
