//! Errors raised while collecting, loading or writing tables.

use std::path::PathBuf;

/// Errors that can occur during a combine run.
///
/// Per-cell problems (such as an encoding repair that does not round-trip)
/// never surface here: transforms recover from them locally.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to list '{path}': {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open workbook {path}: {source}")]
    OpenWorkbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read first worksheet of {path}: {source}")]
    ReadWorksheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize CSV for {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, MergeError>;
