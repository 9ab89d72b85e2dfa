//! # fillkit-ooxml
//!
//! DOCX template handling for fillkit. A DOCX file is a ZIP archive of XML
//! parts; this crate unpacks it, substitutes `{{key}}` placeholder markers
//! in the text parts from a fill row, and writes the rendered document back
//! out.
//!
//! ## Example
//!
//! ```ignore
//! use fillkit_ooxml::DocxTemplate;
//! use fillkit_data::Row;
//!
//! let mut row = Row::new();
//! row.insert("name", "Zhang");
//!
//! let mut doc = DocxTemplate::load("letter.docx")?;
//! doc.render(&row)?;
//! doc.save("out/letter_filled.docx")?;
//! ```

pub mod archive;
pub mod error;
pub mod template;

// Re-export main types and functions
pub use archive::DocxArchive;
pub use error::{DocxError, Result};
pub use template::{fill_docx, DocxTemplate};
