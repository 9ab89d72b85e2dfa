//! # fillkit-xlsx
//!
//! Spreadsheet template filling for fillkit. Scans every cell of every
//! worksheet for `{{key}}` placeholder markers and substitutes values from
//! a fill row: a cell that is exactly one placeholder takes the row value
//! with its native type preserved (numbers stay numbers for downstream
//! formulas and sorting), while a placeholder embedded in longer text is
//! replaced textually and the cell stays a string.
//!
//! ## Example
//!
//! ```ignore
//! use fillkit_xlsx::fill_xlsx;
//! use fillkit_data::Row;
//!
//! let mut row = Row::new();
//! row.insert("id", 1i64);
//! row.insert("name", "A");
//!
//! fill_xlsx(&row, "invoice.xlsx", "out/r1.xlsx")?;
//! ```

pub mod error;
pub mod fill;
pub mod placeholder;

// Re-export main types and functions
pub use error::{Result, SheetError};
pub use fill::{fill_workbook, fill_xlsx};
pub use placeholder::{extract_key, is_single_placeholder, substitute, CellEdit};
