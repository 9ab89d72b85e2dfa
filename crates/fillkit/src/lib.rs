//! # fillkit
//!
//! Fill one row of field → value data into a `.docx` or `.xlsx` template
//! containing `{{key}}` placeholder markers, producing a populated output
//! file.
//!
//! Spreadsheet cells follow two substitution rules: a cell whose entire
//! trimmed content is exactly one placeholder takes the row value with its
//! native type preserved, while a placeholder embedded in longer text is
//! replaced textually. Word documents get literal marker substitution in
//! their body, header, and footer parts.
//!
//! ## Example
//!
//! ```ignore
//! use fillkit::{FillRequest, Row};
//!
//! let mut row = Row::new();
//! row.insert("id", 1i64);
//! row.insert("name", "A");
//!
//! let request = FillRequest::new(row, "invoice.xlsx", "out")?
//!     .with_output_name("r1")?;
//! let written = request.fill()?;
//! ```

pub mod check;
pub mod error;
pub mod paths;
pub mod request;

// Re-export main types and functions
pub use check::{
    check_output_dir, check_template, is_dir, is_output_name, is_template_type, TemplateKind,
};
pub use error::{FillError, Result};
pub use paths::{create_output_dir, output_path};
pub use request::FillRequest;

// Data model and engine entry points, re-exported for direct use
pub use fillkit_data::{Row, RowSet, Scalar};
pub use fillkit_ooxml::fill_docx;
pub use fillkit_xlsx::fill_xlsx;
