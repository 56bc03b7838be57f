//! View row fetching and decoding.
//!
//! Runs `SELECT *` against a single view and decodes the result into the
//! [`Table`] model. Since views are discovered at run time, nothing is known
//! about their columns up front: the decode is driven entirely by the
//! database's reported column types.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{Column as _, Executor, Row, TypeInfo};

use crate::error_handling::CatalogError;
use crate::table::{Column, ColumnKind, Table, Value};

/// Quotes an identifier for interpolation into SQL, doubling any embedded
/// quotes. View names come from the catalog, not from user input, but
/// mixed-case and special characters are common in warehouse naming.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Fetches up to `limit` rows from `schema.view`.
///
/// A `None` limit fetches everything (the gold full variant). The returned
/// table carries the column list even when the view is empty, so exports of
/// empty views still get a header row.
///
/// # Errors
///
/// Returns `SqlError` for query failures (missing view, permission error)
/// and `DecodeError` when a cell cannot be decoded; the run loop catches
/// either, logs the view name, and continues with the next view.
pub async fn fetch_view(
    pool: &PgPool,
    schema: &str,
    view: &str,
    limit: Option<u32>,
) -> Result<Table, CatalogError> {
    let mut sql = format!(
        "SELECT * FROM {}.{}",
        quote_ident(schema),
        quote_ident(view)
    );
    if let Some(n) = limit {
        sql.push_str(&format!(" LIMIT {}", n));
    }

    let rows: Vec<PgRow> = sqlx::query(&sql).fetch_all(pool).await?;

    let columns = match rows.first() {
        Some(row) => columns_of(view, row.columns()),
        // Empty view: ask the database to describe the statement so the
        // header row can still be written
        None => {
            let described = pool.describe(&sql).await?;
            columns_of(view, described.columns())
        }
    };

    let mut decoded_rows = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut cells = Vec::with_capacity(columns.len());
        for (idx, column) in row.columns().iter().enumerate() {
            let cell = decode_cell(row, idx, column.name(), column.type_info().name()).map_err(
                |source| CatalogError::DecodeError {
                    column: column.name().to_string(),
                    source,
                },
            )?;
            cells.push(cell);
        }
        decoded_rows.push(cells);
    }

    Ok(Table::new(view, columns, decoded_rows))
}

fn columns_of(view: &str, columns: &[sqlx::postgres::PgColumn]) -> Vec<Column> {
    columns
        .iter()
        .map(|c| {
            let type_name = c.type_info().name();
            let kind = kind_for_type(type_name);
            if kind == ColumnKind::Other {
                debug!(
                    "View {}: column {} has unsupported type {}, exporting as null",
                    view,
                    c.name(),
                    type_name
                );
            }
            Column {
                name: c.name().to_string(),
                kind,
            }
        })
        .collect()
}

fn kind_for_type(type_name: &str) -> ColumnKind {
    match type_name {
        "BOOL" => ColumnKind::Bool,
        "INT2" | "INT4" | "INT8" => ColumnKind::Int,
        "FLOAT4" | "FLOAT8" | "NUMERIC" => ColumnKind::Float,
        "VARCHAR" | "TEXT" | "BPCHAR" | "NAME" => ColumnKind::Text,
        "DATE" => ColumnKind::Date,
        "TIMESTAMP" => ColumnKind::Timestamp,
        "TIMESTAMPTZ" => ColumnKind::TimestampTz,
        _ => ColumnKind::Other,
    }
}

/// Converts a decoded numeric to a float cell, logging when the value does
/// not fit in an f64 rather than silently nulling it.
fn decimal_value(column: &str, v: Decimal) -> Value {
    match v.to_f64() {
        Some(f) => Value::Float(f),
        None => {
            warn!(
                "Column {}: numeric value {} does not fit in a float, exporting as null",
                column, v
            );
            Value::Null
        }
    }
}

fn decode_cell(
    row: &PgRow,
    idx: usize,
    column: &str,
    type_name: &str,
) -> Result<Value, sqlx::Error> {
    let value = match type_name {
        "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map(Value::Bool),
        "INT2" => row
            .try_get::<Option<i16>, _>(idx)?
            .map(|v| Value::Int(v.into())),
        "INT4" => row
            .try_get::<Option<i32>, _>(idx)?
            .map(|v| Value::Int(v.into())),
        "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(Value::Int),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(idx)?
            .map(|v| Value::Float(v.into())),
        "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map(Value::Float),
        "NUMERIC" => row
            .try_get::<Option<Decimal>, _>(idx)?
            .map(|v| decimal_value(column, v)),
        "VARCHAR" | "TEXT" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(idx)?.map(Value::Text)
        }
        "DATE" => row.try_get::<Option<NaiveDate>, _>(idx)?.map(Value::Date),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(idx)?
            .map(Value::Timestamp),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<FixedOffset>>, _>(idx)?
            .map(Value::TimestampTz),
        // Unsupported type (uuid, json, arrays, ...): reported once per
        // column at fetch time, cells export as null
        _ => None,
    };
    Ok(value.unwrap_or(Value::Null))
}
