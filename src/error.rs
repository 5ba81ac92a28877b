//! Error types for building, loading and encoding exact cover problems.

use std::path::PathBuf;

use thiserror::Error;

/// The input matrix does not have a shape the builder accepts.
///
/// Every variant names the rule that was violated. These are only ever
/// reported at build time; a built structure can always be searched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix has no rows, so not even the column count is known.
    #[error("malformed matrix: the matrix has no rows")]
    NoRows,

    /// A row is shorter or longer than the first row.
    #[error("malformed matrix: row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// A sparse row names a column past the declared column count.
    #[error("malformed matrix: row {row} references column {column}, but there are only {columns} columns")]
    ColumnOutOfRange {
        /// Index of the offending row
        row: usize,
        /// The out of range column index
        column: usize,
        /// Declared column count
        columns: usize,
    },
}

/// Crate wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The matrix could not be turned into a dancing links structure.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// A cell in a textual matrix is not a boolean.
    #[error("line {line}, column {column}: cannot read {token:?} as a boolean cell")]
    Parse {
        /// 1-based line number
        line: usize,
        /// 1-based cell position within the line
        column: usize,
        /// The unreadable text
        token: String,
    },

    /// Reading or writing a file failed.
    #[error("file system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// What was being done
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A puzzle board cannot be encoded as an exact cover problem.
    #[error("invalid board: {reason}")]
    InvalidBoard {
        /// Why the board was rejected
        reason: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn invalid_board(reason: impl Into<String>) -> Error {
    Error::InvalidBoard {
        reason: reason.into(),
    }
}
