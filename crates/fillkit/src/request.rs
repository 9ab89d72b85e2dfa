//! The fill facade: a validated fill request.

use std::path::{Path, PathBuf};

use tracing::info;

use fillkit_data::{is_empty, is_fill_row_type, Row};
use fillkit_ooxml::fill_docx;
use fillkit_xlsx::fill_xlsx;

use crate::check::{check_output_dir, check_template, is_output_name, TemplateKind};
use crate::error::{FillError, Result};
use crate::paths::output_path;

/// Default bare output file name
const DEFAULT_OUTPUT_NAME: &str = "a001";

/// A validated request to fill one row into a template.
///
/// Construction validates every argument up front, so a request that
/// exists is fillable: the row is non-empty, the template is an existing
/// `.docx` or `.xlsx` file, and the output directory exists. The output
/// name (default `a001`) can be swapped any number of times with
/// [`FillRequest::with_output_name`] before calling [`FillRequest::fill`].
///
/// Requests are plain values; share one across threads only if each fill
/// writes to its own output name.
#[derive(Debug, Clone)]
pub struct FillRequest {
    row: Row,
    template: PathBuf,
    kind: TemplateKind,
    output_dir: PathBuf,
    output_name: String,
}

impl FillRequest {
    /// Validate `(row, template, output_dir)` into a fillable request.
    pub fn new(
        row: Row,
        template: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        if row.is_empty() {
            return Err(FillError::DataEmpty);
        }
        let template = template.into();
        let kind = check_template(&template)?;
        let output_dir = output_dir.into();
        check_output_dir(&output_dir)?;

        Ok(Self {
            row,
            template,
            kind,
            output_dir,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        })
    }

    /// Validate dynamic JSON row data into a request.
    ///
    /// The value must be a non-empty mapping of field names to scalars.
    pub fn from_json(
        data: &serde_json::Value,
        template: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        if !is_fill_row_type(data) {
            return Err(FillError::DataType(data.to_string()));
        }
        if is_empty(data) {
            return Err(FillError::DataEmpty);
        }
        let row = Row::from_json_value(data).map_err(|e| FillError::DataType(e.to_string()))?;
        Self::new(row, template, output_dir)
    }

    /// Swap the bare output file name (default `a001`).
    pub fn with_output_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_output_name(&name) {
            return Err(FillError::OutputName(name));
        }
        self.output_name = name;
        Ok(self)
    }

    /// The fill row.
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// The template path.
    pub fn template(&self) -> &Path {
        &self.template
    }

    /// The template kind resolved at construction.
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// The current bare output file name.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// The full destination path: directory + name + template extension.
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.output_dir, &self.output_name, self.kind)
    }

    /// Fill the template and write the output file, overwriting any
    /// existing file at the destination. Returns the written path.
    pub fn fill(&self) -> Result<PathBuf> {
        let dest = self.output_path();
        match self.kind {
            TemplateKind::Docx => fill_docx(&self.row, &self.template, &dest)?,
            TemplateKind::Xlsx => fill_xlsx(&self.row, &self.template, &dest)?,
        }
        info!("Filled {} into {}", self.template.display(), dest.display());
        Ok(dest)
    }
}
