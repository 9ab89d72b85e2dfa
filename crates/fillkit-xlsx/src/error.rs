//! Error types for spreadsheet filling.

use thiserror::Error;

/// Result type for spreadsheet operations
pub type Result<T> = std::result::Result<T, SheetError>;

/// Errors that can occur while filling a workbook
#[derive(Debug, Error)]
pub enum SheetError {
    /// Template file not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Failed to open the workbook
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    /// Failed to write the workbook
    #[error("Failed to write workbook: {0}")]
    WorkbookWrite(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
