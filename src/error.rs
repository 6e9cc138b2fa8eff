use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the data layer (loading and column access).
///
/// A failed file read or a malformed row is fatal for that file's analyses;
/// there is no retry. Division by zero in a derived ratio column is *not* an
/// error: it propagates as NaN in that row and is excluded from aggregates.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: file is empty (expected a header row)")]
    EmptyFile { path: PathBuf },

    #[error("{path}:{line}: expected {expected} fields, found {found}")]
    RowWidth {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("column '{0}' is not numeric")]
    NotNumeric(String),

    #[error("column '{0}' is not text")]
    NotText(String),
}
