//! Fill rows and row sets.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::value::Scalar;

/// One unit of fill data: a field name → [`Scalar`] mapping.
///
/// Rows are ephemeral and caller-supplied; the fill facade borrows them for
/// the duration of a fill operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, Scalar>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value if the name was taken.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.fields.insert(key.into(), value.into())
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields.get(key)
    }

    /// Check whether a field name is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True iff the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build a row from a JSON object of scalars.
    ///
    /// Nested objects and arrays are rejected with a shape error.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            DataError::RowShape(format!("expected a JSON object, got {}", value))
        })?;
        let mut row = Row::new();
        for (key, val) in map {
            row.insert(key.clone(), Scalar::from_json(val)?);
        }
        Ok(row)
    }

    /// Parse a JSON string into a row. See [`Row::from_json_value`].
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        Self::from_json_value(&value)
    }
}

impl FromIterator<(String, Scalar)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Scalar)>>(iter: I) -> Self {
        Row {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Multiple fill rows, in either of the two accepted shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum RowSet {
    /// Rows × columns table
    Table {
        /// Column names, in source order
        columns: Vec<String>,
        /// One entry per row, aligned with `columns`
        rows: Vec<Vec<Scalar>>,
    },
    /// Two-level nested mapping: label → row
    Keyed(BTreeMap<String, Row>),
}

impl RowSet {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            RowSet::Table { rows, .. } => rows.len(),
            RowSet::Keyed(map) => map.len(),
        }
    }

    /// True iff the set contains no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize every row with its label.
    ///
    /// Table rows are labelled by their zero-based position.
    pub fn rows(&self) -> Vec<(String, Row)> {
        match self {
            RowSet::Table { columns, rows } => rows
                .iter()
                .enumerate()
                .map(|(i, cells)| {
                    let row = columns
                        .iter()
                        .cloned()
                        .zip(cells.iter().cloned())
                        .collect();
                    (i.to_string(), row)
                })
                .collect(),
            RowSet::Keyed(map) => map.iter().map(|(k, r)| (k.clone(), r.clone())).collect(),
        }
    }

    /// Build a row set from JSON.
    ///
    /// Accepted shapes: an array of objects (table orientation, columns in
    /// first-seen order) or an object whose every value is itself an object
    /// (keyed orientation). An object of arrays is **not** accepted.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Array(items) => {
                let mut maps = Vec::with_capacity(items.len());
                let mut columns: Vec<String> = Vec::new();
                for item in items {
                    let map = item.as_object().ok_or_else(|| {
                        DataError::RowSetShape(format!(
                            "expected an array of objects, got element {}",
                            item
                        ))
                    })?;
                    for key in map.keys() {
                        if !columns.iter().any(|c| c == key) {
                            columns.push(key.clone());
                        }
                    }
                    maps.push(map);
                }
                let mut rows = Vec::with_capacity(maps.len());
                for map in maps {
                    let mut cells = Vec::with_capacity(columns.len());
                    for column in &columns {
                        let cell = match map.get(column) {
                            Some(v) => Scalar::from_json(v)
                                .map_err(|e| DataError::RowSetShape(e.to_string()))?,
                            None => Scalar::Null,
                        };
                        cells.push(cell);
                    }
                    rows.push(cells);
                }
                Ok(RowSet::Table { columns, rows })
            }
            serde_json::Value::Object(map) => {
                let mut keyed = BTreeMap::new();
                for (label, inner) in map {
                    if !inner.is_object() {
                        return Err(DataError::RowSetShape(format!(
                            "expected every value to be an object, got {} for {:?}",
                            inner, label
                        )));
                    }
                    keyed.insert(label.clone(), Row::from_json_value(inner)?);
                }
                Ok(RowSet::Keyed(keyed))
            }
            other => Err(DataError::RowSetShape(format!(
                "expected an array of objects or an object of objects, got {}",
                other
            ))),
        }
    }

    /// Load a table from a CSV file: the first record names the columns,
    /// each following record becomes one row.
    ///
    /// Field values are inferred: empty fields become [`Scalar::Null`],
    /// integers and floats keep their numeric type, `true`/`false` become
    /// booleans, everything else stays text.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false) // We handle headers ourselves
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        let mut columns: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<Scalar>> = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            if i == 0 {
                columns = record.iter().map(|s| s.to_string()).collect();
            } else {
                rows.push(record.iter().map(parse_field).collect());
            }
        }

        Ok(RowSet::Table { columns, rows })
    }
}

/// Infer a scalar from one CSV field.
fn parse_field(field: &str) -> Scalar {
    if field.is_empty() {
        return Scalar::Null;
    }
    if let Ok(i) = field.parse::<i64>() {
        return Scalar::Int(i);
    }
    if let Ok(v) = field.parse::<f64>() {
        return Scalar::Float(v);
    }
    match field {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => Scalar::Text(field.to_string()),
    }
}
