//! Tests for CLI option parsing.

use clap::Parser;
use std::path::PathBuf;

use warehouse_export::export::ExportFormat;
use warehouse_export::{Config, Schema};

#[test]
fn schema_is_required() {
    let result = Config::try_parse_from(["warehouse_export"]);
    assert!(result.is_err());
}

#[test]
fn defaults_are_a_preview_export() {
    let config = Config::try_parse_from(["warehouse_export", "--schema", "bronze"]).unwrap();
    assert_eq!(config.schema, Schema::Bronze);
    assert_eq!(config.effective_row_limit(), Some(25));
    assert_eq!(config.out_dir, PathBuf::from("reports"));
    assert_eq!(config.effective_formats().len(), 4);
}

#[test]
fn formats_parse_as_comma_list() {
    let config = Config::try_parse_from([
        "warehouse_export",
        "--schema",
        "gold",
        "--formats",
        "csv,excel",
    ])
    .unwrap();
    assert_eq!(
        config.effective_formats(),
        vec![ExportFormat::Csv, ExportFormat::Excel]
    );
}

#[test]
fn full_flag_removes_row_cap() {
    let config =
        Config::try_parse_from(["warehouse_export", "--schema", "gold", "--full"]).unwrap();
    assert_eq!(config.effective_row_limit(), None);
}

#[test]
fn row_limit_is_configurable() {
    let config = Config::try_parse_from([
        "warehouse_export",
        "--schema",
        "silver",
        "--row-limit",
        "100",
    ])
    .unwrap();
    assert_eq!(config.effective_row_limit(), Some(100));
}

#[test]
fn schema_prefix_feeds_schema_name() {
    let config = Config::try_parse_from([
        "warehouse_export",
        "--schema",
        "gold",
        "--schema-prefix",
        "dbt_",
    ])
    .unwrap();
    assert_eq!(config.schema_name(), "dbt_gold");
}

#[test]
fn unknown_format_is_rejected() {
    let result = Config::try_parse_from([
        "warehouse_export",
        "--schema",
        "bronze",
        "--formats",
        "parquet",
    ]);
    assert!(result.is_err());
}
