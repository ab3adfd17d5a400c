//! Error types for mailing-list output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the extract.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create, write or persist the output file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the table as CSV.
    #[error("failed to serialize {path}: {message}")]
    Serialize { path: PathBuf, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
