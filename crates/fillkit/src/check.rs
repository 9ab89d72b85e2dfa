//! Template, directory, and output-name validation.

use std::path::Path;

use crate::error::{FillError, Result};

/// Template kinds accepted by the filler, keyed by file extension.
///
/// Resolved once when a request is validated; filling dispatches on the
/// variant rather than re-inspecting the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Word flow document (`.docx`)
    Docx,
    /// Spreadsheet workbook (`.xlsx`)
    Xlsx,
}

impl TemplateKind {
    /// Resolve the kind from a path's extension (case-sensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("docx") => Some(TemplateKind::Docx),
            Some("xlsx") => Some(TemplateKind::Xlsx),
            _ => None,
        }
    }

    /// The file extension appended to output paths.
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateKind::Docx => "docx",
            TemplateKind::Xlsx => "xlsx",
        }
    }
}

/// True iff the file's extension is one of the allowed template types.
pub fn is_template_type(path: impl AsRef<Path>) -> bool {
    TemplateKind::from_path(path.as_ref()).is_some()
}

/// True iff the path exists and is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// True iff the value is a bare relative file name without an extension.
///
/// A relative subdirectory component is allowed (`reports/a001`).
pub fn is_output_name(name: &str) -> bool {
    let path = Path::new(name);
    !name.is_empty() && !path.is_absolute() && path.extension().is_none()
}

/// Validate a template path and resolve its kind.
///
/// The extension is checked first; a path that would otherwise be a valid
/// template but does not exist fails with [`FillError::TemplateMissing`].
pub fn check_template(path: &Path) -> Result<TemplateKind> {
    let Some(kind) = TemplateKind::from_path(path) else {
        return Err(FillError::TemplateType(path.to_path_buf()));
    };
    if !path.exists() {
        return Err(FillError::TemplateMissing(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(FillError::TemplateType(path.to_path_buf()));
    }
    Ok(kind)
}

/// Validate the output directory.
pub fn check_output_dir(path: &Path) -> Result<()> {
    if !is_dir(path) {
        return Err(FillError::OutputDir(path.to_path_buf()));
    }
    Ok(())
}
