use thiserror::Error;

use maillist_model::TableError;

#[derive(Debug, Error)]
pub enum TransformError {
    /// The identity column is absent; the pipeline cannot filter or dedupe
    /// without it.
    #[error("required identity column '{column}' is missing")]
    MissingColumn { column: String },

    #[error(transparent)]
    Table(#[from] TableError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
