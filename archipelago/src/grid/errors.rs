//! Errors reported when loading a map grid.

use thiserror::Error;

/// Error returned when a sequence of text rows does not form a rectangular grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum MalformedGridError {
    /// The input contained no rows, or only rows with no cells.
    #[error("the map contained no cells")]
    Empty,

    /// A row's length did not match the length of the first row.
    #[error("row {row} is {found} cells long, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row, which fixes the width of the grid.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}
