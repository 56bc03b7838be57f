//! Excel export.
//!
//! Writes a single-sheet workbook with a bold header row. Numeric cells are
//! written as numbers and dates/timestamps as real datetime cells, so
//! spreadsheet formulas work on them. Timezone-aware values are written as
//! text; the gold cleaning pass has already stripped timezones by this
//! point, so they only show up in bronze and silver exports.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use crate::table::{Table, Value};

/// Writes a table as an Excel workbook with one sheet.
pub fn write_excel(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    for (col, name) in table.column_names().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *name, &header_format)
            .with_context(|| format!("Failed to write header at column {col}"))?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                // NULL leaves the cell blank
                Value::Null => {}
                Value::Bool(v) => {
                    worksheet.write_boolean(excel_row, col, *v)?;
                }
                Value::Int(v) => {
                    worksheet.write_number(excel_row, col, *v as f64)?;
                }
                Value::Float(v) => {
                    worksheet.write_number(excel_row, col, *v)?;
                }
                Value::Date(v) => {
                    worksheet.write_datetime_with_format(excel_row, col, v, &date_format)?;
                }
                Value::Timestamp(v) => {
                    worksheet.write_datetime_with_format(excel_row, col, v, &datetime_format)?;
                }
                other => {
                    worksheet.write_string(excel_row, col, other.to_display())?;
                }
            }
        }
    }

    worksheet.autofit();

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnKind};
    use tempfile::TempDir;

    #[test]
    fn test_excel_file_is_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.xlsx");
        let table = Table::new(
            "orders",
            vec![
                Column {
                    name: "id".into(),
                    kind: ColumnKind::Int,
                },
                Column {
                    name: "total".into(),
                    kind: ColumnKind::Float,
                },
            ],
            vec![
                vec![Value::Int(1), Value::Float(9.99)],
                vec![Value::Int(2), Value::Null],
            ],
        );

        write_excel(&table, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // XLSX files are zip archives
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_excel_date_and_timestamp_cells() {
        use chrono::{NaiveDate, NaiveDateTime};

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipments.xlsx");
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let stamp = NaiveDateTime::parse_from_str("2024-03-15 08:30:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let table = Table::new(
            "shipments",
            vec![
                Column {
                    name: "ship_date".into(),
                    kind: ColumnKind::Date,
                },
                Column {
                    name: "created_at".into(),
                    kind: ColumnKind::Timestamp,
                },
            ],
            vec![vec![Value::Date(day), Value::Timestamp(stamp)]],
        );

        write_excel(&table, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_excel_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");
        let table = Table::new(
            "empty",
            vec![Column {
                name: "only_column".into(),
                kind: ColumnKind::Text,
            }],
            vec![],
        );

        write_excel(&table, &path).unwrap();
        assert!(path.exists());
    }
}
