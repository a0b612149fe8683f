//! Error raised by the normalization entry points.

use thiserror::Error;

/// Structurally invalid input. Raised immediately, the call returns no
/// partial corpus.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid cleaning pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("row {row} has no `{column}` field")]
    MissingColumn { column: String, row: usize },
    #[error("row {row} holds a non-text value in `{column}`")]
    NonTextValue { column: String, row: usize },
    #[error("row {row} is out of range for a column of {len} rows")]
    RowOutOfRange { row: usize, len: usize },
}
