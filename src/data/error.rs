//! Shared error type for dataset loading.

use std::io;

/// Errors that can occur when loading a delimited dataset.
///
/// Column layout must be consistent across all rows before training starts,
/// so malformed rows fail the whole load rather than being skipped.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: label column {column} is out of bounds for a row of {width} fields")]
    LabelOutOfBounds {
        line: usize,
        column: isize,
        width: usize,
    },

    #[error("line {line}: expected {expected} fields, got {got}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        got: usize,
    },
}
