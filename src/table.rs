//! In-memory tabular results.
//!
//! Every view export flows through this model: the catalog fetch decodes
//! database rows into a [`Table`], the gold-tier cleaning rewrites it in
//! place, and each output format renders it. Nothing here is persisted;
//! a table lives for one view within one run.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Coarse column type, derived from the database type at fetch time.
///
/// The cleaning pass uses this to find timezone-aware datetime columns;
/// renderers use it to decide numeric handling. Types outside the supported
/// scalar set are `Other` and their cells decode as null.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Boolean
    Bool,
    /// Integer of any width
    Int,
    /// Floating point or numeric/decimal
    Float,
    /// Character data
    Text,
    /// Calendar date
    Date,
    /// Datetime without timezone
    Timestamp,
    /// Timezone-aware datetime
    TimestampTz,
    /// Anything else (rendered as null)
    Other,
}

/// A single column: name plus decoded kind.
#[derive(Clone, Debug)]
pub struct Column {
    /// Column name as reported by the database.
    pub name: String,
    /// Decoded type kind.
    pub kind: ColumnKind,
}

/// A typed scalar cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// SQL NULL (or an unsupported type).
    Null,
    /// Boolean
    Bool(bool),
    /// Integer (all widths widen to i64)
    Int(i64),
    /// Floating point
    Float(f64),
    /// Character data
    Text(String),
    /// Calendar date
    Date(NaiveDate),
    /// Datetime without timezone
    Timestamp(NaiveDateTime),
    /// Timezone-aware datetime
    TimestampTz(DateTime<FixedOffset>),
}

impl Value {
    /// Returns true for SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value, used by currency formatting and the
    /// delay-column gradient. Text is not coerced here; that is the
    /// cleaning pass's job.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Cell text shared by the CSV, Markdown, and Excel renderers.
    /// NULL renders as the empty string.
    pub fn to_display(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Text(v) => v.clone(),
            Value::Date(v) => v.format("%Y-%m-%d").to_string(),
            Value::Timestamp(v) => v.format("%Y-%m-%d %H:%M:%S").to_string(),
            Value::TimestampTz(v) => v.format("%Y-%m-%d %H:%M:%S%:z").to_string(),
        }
    }
}

/// An ordered table result for one view.
#[derive(Clone, Debug)]
pub struct Table {
    /// View the rows came from.
    pub view: String,
    /// Ordered columns.
    pub columns: Vec<Column>,
    /// Rows, each the same length as `columns`.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates a table from columns and rows.
    pub fn new(view: impl Into<String>, columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            view: view.into(),
            columns,
            rows,
        }
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
