// Shared test helpers for building in-memory tables.
//
// The renderers and the cleaning pass all consume the Table model, so
// integration tests build tables directly instead of standing up a database.

use warehouse_export::table::{Column, ColumnKind, Table, Value};

/// A small granular table: order id, status, total.
#[allow(dead_code)] // Used by other test files
pub fn orders_table(rows: usize) -> Table {
    let data = (0..rows)
        .map(|i| {
            vec![
                Value::Int(i as i64 + 1),
                Value::Text(if i % 2 == 0 { "shipped" } else { "pending" }.into()),
                Value::Float(10.0 + i as f64),
            ]
        })
        .collect();
    Table::new(
        "sales_by_order",
        vec![
            Column {
                name: "order_id".into(),
                kind: ColumnKind::Int,
            },
            Column {
                name: "status".into(),
                kind: ColumnKind::Text,
            },
            Column {
                name: "order_total".into(),
                kind: ColumnKind::Float,
            },
        ],
        data,
    )
}

/// A gold aggregate table with monetary and delay columns, monetary values
/// arriving as formatted strings the way the marts sometimes emit them.
#[allow(dead_code)] // Used by other test files
pub fn monthly_summary_table() -> Table {
    Table::new(
        "sales_monthly_summary",
        vec![
            Column {
                name: "month".into(),
                kind: ColumnKind::Text,
            },
            Column {
                name: "total_revenue".into(),
                kind: ColumnKind::Text,
            },
            Column {
                name: "avg_delivery_delay_days".into(),
                kind: ColumnKind::Float,
            },
        ],
        vec![
            vec![
                Value::Text("2024-01".into()),
                Value::Text("$1,234.56".into()),
                Value::Float(2.0),
            ],
            vec![
                Value::Text("2024-02".into()),
                Value::Text("nan".into()),
                Value::Float(6.5),
            ],
        ],
    )
}
