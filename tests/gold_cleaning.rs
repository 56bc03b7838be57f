//! Tests for the gold-tier pipeline: cleaning followed by styled rendering.

use tempfile::TempDir;

use warehouse_export::clean::clean_for_spreadsheet;
use warehouse_export::export::{classify, render, Category, ExportFormat};
use warehouse_export::table::Value;

#[path = "helpers.rs"]
mod helpers;

use helpers::monthly_summary_table;

#[test]
fn monthly_views_are_aggregate() {
    assert_eq!(classify("sales_monthly_summary"), Category::Agg);
    assert_eq!(classify("sales_by_order"), Category::Granular);
}

#[test]
fn cleaning_coerces_monetary_strings() {
    let mut table = monthly_summary_table();
    clean_for_spreadsheet(&mut table);

    assert_eq!(table.rows[0][1], Value::Float(1234.56));
    assert_eq!(table.rows[1][1], Value::Null);
}

#[test]
fn cleaned_table_renders_styled_currency() {
    let mut table = monthly_summary_table();
    clean_for_spreadsheet(&mut table);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales_monthly_summary.html");
    render(&table, ExportFormat::Html, &path, true).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("<caption>sales_monthly_summary</caption>"));
    assert!(contents.contains("$1,234.56"));
    // The "nan" revenue became null and renders as an empty cell
    assert!(!contents.contains("nan"));
    // Delay cells carry the gradient
    assert!(contents.contains("background-color: #63be7b"));
    assert!(contents.contains("background-color: #f8696b"));
}

#[test]
fn unstyled_render_of_same_table_has_no_decoration() {
    let mut table = monthly_summary_table();
    clean_for_spreadsheet(&mut table);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales_monthly_summary.html");
    render(&table, ExportFormat::Html, &path, false).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("<caption>"));
    assert!(!contents.contains("background-color"));
    // Without currency formatting the cleaned float renders bare
    assert!(contents.contains("<td>1234.56</td>"));
}

#[test]
fn cleaning_csv_round_trip_renders_floats() {
    let mut table = monthly_summary_table();
    clean_for_spreadsheet(&mut table);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales_monthly_summary.csv");
    render(&table, ExportFormat::Csv, &path, false).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("1234.56"));
    assert!(!contents.contains('$'));
}
