//! Markdown export.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::table::Table;

/// Writes a table as a Markdown pipe table with a header row.
pub fn write_markdown(table: &Table, path: &Path) -> Result<()> {
    let mut out = String::new();

    out.push('|');
    for name in table.column_names() {
        out.push(' ');
        out.push_str(&escape_cell(name));
        out.push_str(" |");
    }
    out.push('\n');

    out.push('|');
    for _ in &table.columns {
        out.push_str(" --- |");
    }
    out.push('\n');

    for row in &table.rows {
        out.push('|');
        for cell in row {
            out.push(' ');
            out.push_str(&escape_cell(&cell.to_display()));
            out.push_str(" |");
        }
        out.push('\n');
    }

    fs::write(path, out)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

// Pipes break the table structure and newlines break the row; everything
// else passes through untouched
fn escape_cell(raw: &str) -> String {
    raw.replace('|', "\\|").replace(['\r', '\n'], " ")
}
