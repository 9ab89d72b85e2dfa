//! Error types for DOCX operations

use thiserror::Error;

/// Errors that can occur while loading or rendering a DOCX template
#[derive(Error, Debug)]
pub enum DocxError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required part not found in archive
    #[error("Required part not found: {0}")]
    MissingPart(String),
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, DocxError>;
