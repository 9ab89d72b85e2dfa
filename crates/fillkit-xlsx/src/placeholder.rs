//! Placeholder detection and substitution for spreadsheet cells.
//!
//! A placeholder is `{{key}}` where the key is one or more word characters
//! or CJK ideographs. A cell whose entire trimmed content is exactly one
//! placeholder takes the row value with its native type preserved; a
//! placeholder embedded in longer text is replaced textually, so the cell
//! stays a string.

use std::sync::LazyLock;

use regex::Regex;

use fillkit_data::{Row, Scalar};

/// Placeholder open marker
pub const OPEN: &str = "{{";
/// Placeholder close marker
pub const CLOSE: &str = "}}";

static SINGLE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{[\w\x{4E00}-\x{9FA5}]+\}\}$").unwrap());

/// Check whether the trimmed cell text is exactly one placeholder.
pub fn is_single_placeholder(text: &str) -> bool {
    SINGLE_PLACEHOLDER.is_match(text.trim())
}

/// Extract the first placeholder key: the substring strictly between the
/// first `{{` and the following `}}`, with stray brace characters stripped.
pub fn extract_key(text: &str) -> Option<&str> {
    let open = text.find(OPEN)?;
    let close = open + text[open..].find(CLOSE)?;
    Some(text[open + OPEN.len()..close].trim_matches(|c| c == '{' || c == '}'))
}

/// Outcome of substituting one cell's text against a row.
#[derive(Debug, PartialEq)]
pub enum CellEdit<'a> {
    /// No placeholder resolved; the cell stays untouched
    Keep,
    /// The whole cell was one placeholder: replace with the value,
    /// preserving its native type
    Value(&'a Scalar),
    /// Embedded placeholders resolved into new string content
    Text(String),
}

/// Apply the substitution rules to one cell's text.
///
/// A key that is not present in the row never changes the cell and never
/// errors.
pub fn substitute<'a>(text: &str, row: &'a Row) -> CellEdit<'a> {
    if !text.contains(OPEN) {
        return CellEdit::Keep;
    }
    if is_single_placeholder(text) {
        if let Some(value) = extract_key(text).and_then(|key| row.get(key)) {
            return CellEdit::Value(value);
        }
        return CellEdit::Keep;
    }
    match substitute_embedded(text, row) {
        Some(rendered) => CellEdit::Text(rendered),
        None => CellEdit::Keep,
    }
}

/// Resolve every embedded placeholder whose key is in `row`.
///
/// Keys are collected left to right, then each literal `{{key}}` substring
/// is replaced in turn (all of its occurrences at once). Empty row values
/// substitute as the empty string. An unrecognized key stays in place and
/// does not block later placeholders. Returns `None` when nothing changed.
fn substitute_embedded(text: &str, row: &Row) -> Option<String> {
    let mut keys: Vec<&str> = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find(OPEN) {
        let Some(close) = rest[open..].find(CLOSE).map(|i| open + i) else {
            break;
        };
        let key = rest[open + OPEN.len()..close].trim_matches(|c| c == '{' || c == '}');
        if !key.is_empty() && !keys.contains(&key) {
            keys.push(key);
        }
        rest = &rest[close + CLOSE.len()..];
    }

    let mut out = text.to_string();
    let mut changed = false;
    for key in keys {
        let Some(value) = row.get(key) else { continue };
        let marker = format!("{}{}{}", OPEN, key, CLOSE);
        if !out.contains(&marker) {
            continue;
        }
        let replacement = if value.is_empty() {
            String::new()
        } else {
            value.to_string()
        };
        out = out.replace(&marker, &replacement);
        changed = true;
    }
    changed.then_some(out)
}
