//! Scalar cell values carried by fill rows.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// A single field value: number, text, date, boolean, or the empty sentinel.
///
/// The variant matters to spreadsheet filling: a whole-cell placeholder
/// substitution writes the value through the matching typed setter, so a
/// number stays a number and a date stays a date in the output workbook.
///
/// Deserialization is untagged: JSON `null` becomes [`Scalar::Null`],
/// numbers become [`Scalar::Int`] when they fit an `i64` and
/// [`Scalar::Float`] otherwise, and strings always become [`Scalar::Text`]
/// (dates are constructed programmatically, never parsed out of JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Empty sentinel (JSON `null`)
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Calendar date, rendered as ISO `yyyy-mm-dd`
    Date(NaiveDate),
}

impl Scalar {
    /// Emptiness check: the null sentinel, a NaN float, and a
    /// blank/whitespace-only string count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Float(v) => v.is_nan(),
            Scalar::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Convert a JSON scalar into a `Scalar`.
    ///
    /// Objects and arrays are not scalars and are rejected with a shape
    /// error.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(Scalar::Null),
            serde_json::Value::Bool(b) => Ok(Scalar::Bool(*b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Scalar::Int(i)),
                None => Ok(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => Ok(Scalar::Text(s.clone())),
            other => Err(DataError::RowShape(format!(
                "expected a scalar value, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) => {
                // Format floats nicely (remove unnecessary decimals)
                if v.is_finite() && v.fract() == 0.0 {
                    write!(f, "{:.0}", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            Scalar::Text(s) => f.write_str(s),
            Scalar::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(v: NaiveDate) -> Self {
        Scalar::Date(v)
    }
}
