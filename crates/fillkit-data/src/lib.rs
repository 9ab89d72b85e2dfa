//! # fillkit-data
//!
//! Row data model and shape validation for fillkit: typed scalar values,
//! single fill rows, row sets, and the predicates that classify dynamic
//! input before it is converted to the typed model.
//!
//! ## Example
//!
//! ```
//! use fillkit_data::{Row, Scalar};
//!
//! let mut row = Row::new();
//! row.insert("age", 15i64);
//! row.insert("name", "Zhang");
//!
//! assert_eq!(row.get("age"), Some(&Scalar::Int(15)));
//! assert!(!row.is_empty());
//! ```

pub mod error;
pub mod row;
pub mod shape;
pub mod value;

// Re-export main types and functions
pub use error::{DataError, Result};
pub use row::{Row, RowSet};
pub use shape::{is_empty, is_fill_row_type, is_fill_rows_type, is_number};
pub use value::Scalar;
