//! Error types for the library.

use crate::summary::SummaryError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning raw input into numbers.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file could not be read.
    #[error("failed to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token is neither empty nor a finite number (strict mode only).
    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// The CSV reader itself failed (e.g. invalid UTF-8 in a path-based read).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl IngestError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// True when the failure happened before any parsing.
    pub fn is_file_read(&self) -> bool {
        matches!(self, Self::FileRead { .. })
    }
}

/// Umbrella error for the load pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Validation(#[from] SummaryError),
}
