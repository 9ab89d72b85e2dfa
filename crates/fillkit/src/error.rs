//! The fill error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for fill operations
pub type Result<T> = std::result::Result<T, FillError>;

/// Errors raised while validating or executing a fill request.
///
/// Validation failures are raised synchronously at construction or
/// assignment; a request is never partially constructed. Engine failures
/// pass through with their original type.
#[derive(Debug, Error)]
pub enum FillError {
    /// Row data argument is not a recognized shape
    #[error("Fill data is not a row shape: {0}")]
    DataType(String),

    /// Row data is a recognized shape but has no entries
    #[error("Fill data is empty")]
    DataEmpty,

    /// Template path has a disallowed extension or is not a file
    #[error("Template {} must be a file with a docx or xlsx extension", .0.display())]
    TemplateType(PathBuf),

    /// Template path does not exist on disk
    #[error("Template {} does not exist", .0.display())]
    TemplateMissing(PathBuf),

    /// Output directory does not exist or is not a directory
    #[error("Output directory {} does not exist or is not a directory", .0.display())]
    OutputDir(PathBuf),

    /// Output name is not a bare relative file name without an extension
    #[error("Invalid output name {0:?}: expected a relative file name without an extension")]
    OutputName(String),

    /// DOCX engine failure, passed through unmodified
    #[error(transparent)]
    Docx(#[from] fillkit_ooxml::DocxError),

    /// Spreadsheet engine failure, passed through unmodified
    #[error(transparent)]
    Xlsx(#[from] fillkit_xlsx::SheetError),
}
