//! Shape predicates for dynamic fill data.
//!
//! Row data often arrives as untyped JSON before it is converted into the
//! typed model. These predicates classify that input without consuming it
//! and have no side effects.

use serde_json::Value;

/// True iff the value is a mapping-like single row (a JSON object).
pub fn is_fill_row_type(value: &Value) -> bool {
    value.is_object()
}

/// True iff the value is a multi-row shape: an array of objects (table
/// orientation) or an object whose **every** value is itself an object.
///
/// An object of arrays is not accepted: the nested-mapping check requires
/// every value of the outer mapping to be mapping-like.
pub fn is_fill_rows_type(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(Value::is_object),
        Value::Object(map) => map.values().all(Value::is_object),
        _ => false,
    }
}

/// Polymorphic emptiness check.
///
/// Null, blank or whitespace-only strings, empty objects, empty arrays, and
/// arrays whose elements are all empty count as empty. Any other value does
/// not.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.iter().all(is_empty),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// True iff the string parses as a number.
pub fn is_number(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}
