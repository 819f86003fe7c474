//! Error types for park-history.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole export or import call.
///
/// None of them leave the ride's history partially updated.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("cannot export empty ride history for {ride}")]
    EmptyHistory { ride: String },

    #[error("file path cannot be empty")]
    EmptyPath,

    #[error("{}: {source}", .path.display())]
    File {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, HistoryError>`.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Why one import line was skipped.  A skip never aborts the import.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("empty line")]
    Blank,

    #[error("invalid field count ({found}/5 required)")]
    FieldCount { found: usize },

    #[error("invalid visit date format ({0:?}), must be YYYY-MM-DD")]
    InvalidDate(String),

    #[error("mandatory field {0} cannot be empty")]
    MissingField(&'static str),

    #[error("invalid age format ({0:?}), must be an integer")]
    InvalidAge(String),

    #[error("invalid age ({0}), cannot be negative")]
    NegativeAge(i32),
}
