use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    /// A row's cell count does not match the table's column count.
    #[error("row has {actual} cells, expected {expected}")]
    WidthMismatch { expected: usize, actual: usize },

    /// A column's value count does not match the table's row count.
    #[error("column '{column}' has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;
