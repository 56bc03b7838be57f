//! Gold-tier data cleaning.
//!
//! Spreadsheet consumers choke on timezone-aware datetimes, and monetary
//! columns in the marts sometimes arrive as formatted strings. This pass
//! rewrites a fetched table in place:
//!
//! - timezone-aware datetime columns become naive, keeping the wall-clock
//!   value and dropping the offset;
//! - columns named like money (cost/revenue/profit) are coerced to floats,
//!   with currency symbols and thousands separators stripped and anything
//!   non-numeric becoming null.

mod money;

pub use money::parse_money;

use crate::config::{DELAY_COLUMN_KEYWORD, MONETARY_COLUMN_KEYWORDS};
use crate::table::{ColumnKind, Table, Value};

/// True if the column name marks a monetary column.
pub fn is_monetary_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    MONETARY_COLUMN_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// True if the column name marks a delay column (gradient-styled in the
/// aggregate HTML reports).
pub fn is_delay_column(name: &str) -> bool {
    name.to_lowercase().contains(DELAY_COLUMN_KEYWORD)
}

/// Cleans a table for spreadsheet compatibility (gold tier only).
pub fn clean_for_spreadsheet(table: &mut Table) {
    for (idx, column) in table.columns.iter_mut().enumerate() {
        if column.kind == ColumnKind::TimestampTz {
            column.kind = ColumnKind::Timestamp;
            for row in &mut table.rows {
                if let Value::TimestampTz(dt) = row[idx] {
                    row[idx] = Value::Timestamp(dt.naive_local());
                }
            }
        }

        if is_monetary_column(&column.name) {
            column.kind = ColumnKind::Float;
            for row in &mut table.rows {
                row[idx] = coerce_monetary(&row[idx]);
            }
        }
    }
}

fn coerce_monetary(value: &Value) -> Value {
    match value {
        Value::Text(s) => parse_money(s).map(Value::Float).unwrap_or(Value::Null),
        Value::Int(v) => Value::Float(*v as f64),
        Value::Float(v) if v.is_finite() => Value::Float(*v),
        // Non-finite floats, dates, and booleans in a monetary column are
        // malformed data
        _ => Value::Null,
    }
}
