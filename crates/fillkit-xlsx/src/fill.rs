//! Workbook filling: apply placeholder substitution to every cell.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;
use umya_spreadsheet::{reader, writer, Cell, Spreadsheet};

use fillkit_data::{Row, Scalar};

use crate::error::{Result, SheetError};
use crate::placeholder::{substitute, CellEdit, OPEN};

/// Substitute placeholders in every cell of every worksheet.
///
/// Returns the number of cells that changed.
pub fn fill_workbook(book: &mut Spreadsheet, row: &Row) -> usize {
    let mut changed = 0usize;
    for sheet in book.get_sheet_collection_mut() {
        for cell in sheet.get_cell_collection_mut() {
            let text = cell.get_value().to_string();
            if !text.contains(OPEN) {
                continue;
            }
            match substitute(&text, row) {
                CellEdit::Keep => {}
                CellEdit::Value(value) => {
                    apply_value(cell, value);
                    changed += 1;
                }
                CellEdit::Text(rendered) => {
                    // Embedded substitution always leaves a string cell
                    cell.set_value_string(rendered);
                    changed += 1;
                }
            }
        }
    }
    changed
}

/// Write a scalar through the setter that preserves its cell type.
fn apply_value(cell: &mut Cell, value: &Scalar) {
    match value {
        Scalar::Null => {
            cell.set_value_string("");
        }
        Scalar::Bool(b) => {
            cell.set_value_bool(*b);
        }
        Scalar::Int(i) => {
            cell.set_value_number(*i as f64);
        }
        Scalar::Float(v) => {
            cell.set_value_number(*v);
        }
        Scalar::Text(s) => {
            cell.set_value_string(s.clone());
        }
        Scalar::Date(d) => {
            cell.set_value_number(excel_serial(d));
            cell.get_style_mut()
                .get_number_format_mut()
                .set_format_code("yyyy-mm-dd");
        }
    }
}

/// Serial number of a date in the 1900 date system (epoch 1899-12-30).
fn excel_serial(date: &NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (*date - epoch).num_days() as f64
}

/// Fill `row` into an xlsx template file, saving the populated workbook to
/// `dest` and overwriting any existing file there.
pub fn fill_xlsx<P: AsRef<Path>, Q: AsRef<Path>>(row: &Row, template: P, dest: Q) -> Result<()> {
    let template = template.as_ref();
    if !template.exists() {
        return Err(SheetError::FileNotFound(template.display().to_string()));
    }

    let mut book = reader::xlsx::read(template)
        .map_err(|e| SheetError::WorkbookOpen(format!("{}: {}", template.display(), e)))?;

    let changed = fill_workbook(&mut book, row);
    debug!("Substituted {} cell(s) from {}", changed, template.display());

    writer::xlsx::write(&book, dest.as_ref())
        .map_err(|e| SheetError::WorkbookWrite(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        let mut row = Row::new();
        row.insert("age", 15i64);
        row.insert("name", "Zhang");
        row.insert("score", 95.5);
        row.insert("v", Scalar::Null);
        row
    }

    #[test]
    fn test_fill_workbook_single_and_embedded() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.get_cell_mut("A1").set_value("{{age}}");
        sheet.get_cell_mut("B1").set_value("Name: {{name}}");
        sheet.get_cell_mut("C1").set_value("{{missing}}");
        sheet.get_cell_mut("D1").set_value("plain");

        let changed = fill_workbook(&mut book, &sample_row());
        assert_eq!(changed, 2);

        let sheet = book.get_active_sheet();
        assert_eq!(sheet.get_value("A1"), "15");
        assert_eq!(sheet.get_value("B1"), "Name: Zhang");
        assert_eq!(sheet.get_value("C1"), "{{missing}}");
        assert_eq!(sheet.get_value("D1"), "plain");
    }

    #[test]
    fn test_fill_workbook_empty_value_embedded() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.get_cell_mut("A1").set_value("X={{v}}");

        fill_workbook(&mut book, &sample_row());
        assert_eq!(book.get_active_sheet().get_value("A1"), "X=");
    }

    #[test]
    fn test_fill_workbook_covers_every_sheet() {
        let mut book = umya_spreadsheet::new_file();
        book.get_active_sheet_mut()
            .get_cell_mut("A1")
            .set_value("{{age}}");
        let second = book.new_sheet("Second").unwrap();
        second.get_cell_mut("A1").set_value("Score: {{score}}");

        let changed = fill_workbook(&mut book, &sample_row());
        assert_eq!(changed, 2);
        assert_eq!(
            book.get_sheet_by_name("Second").unwrap().get_value("A1"),
            "Score: 95.5"
        );
    }

    #[test]
    fn test_excel_serial() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert_eq!(excel_serial(&date), 2.0);
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(excel_serial(&date), 45322.0);
    }
}
