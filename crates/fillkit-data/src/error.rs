//! Error types for the row data model.

use thiserror::Error;

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while building or loading fill rows
#[derive(Debug, Error)]
pub enum DataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Value is not a single-row shape
    #[error("Not a fill row shape: {0}")]
    RowShape(String),

    /// Value is not a row-set shape
    #[error("Not a fill row-set shape: {0}")]
    RowSetShape(String),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}
