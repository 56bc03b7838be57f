//! CSV export.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::table::Table;

/// Writes a table as CSV: comma-separated, one header row, no index column.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    writer.write_record(table.column_names())?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|v| v.to_display()))?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnKind, Value};
    use tempfile::TempDir;

    #[test]
    fn test_csv_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.csv");
        let table = Table::new(
            "orders",
            vec![
                Column {
                    name: "id".into(),
                    kind: ColumnKind::Int,
                },
                Column {
                    name: "status".into(),
                    kind: ColumnKind::Text,
                },
            ],
            vec![
                vec![Value::Int(1), Value::Text("shipped".into())],
                vec![Value::Int(2), Value::Null],
            ],
        );

        write_csv(&table, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("id,status"));
        assert_eq!(lines.next(), Some("1,shipped"));
        assert_eq!(lines.next(), Some("2,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_empty_table_still_has_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        let table = Table::new(
            "empty",
            vec![Column {
                name: "only_column".into(),
                kind: ColumnKind::Text,
            }],
            vec![],
        );

        write_csv(&table, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), "only_column");
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quoted.csv");
        let table = Table::new(
            "quoted",
            vec![Column {
                name: "note".into(),
                kind: ColumnKind::Text,
            }],
            vec![vec![Value::Text("a, b".into())]],
        );

        write_csv(&table, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"a, b\""));
    }
}
