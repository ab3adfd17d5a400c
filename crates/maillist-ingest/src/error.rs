//! Error types for mailing-list ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an export into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the source file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source cannot be parsed into a table at all, e.g. inconsistent
    /// row widths or broken quoting.
    #[error("malformed CSV {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// The source has no header row.
    #[error("CSV file has no header row: {path}")]
    Empty { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
