//! HTML export.
//!
//! Two variants: a plain table for the preview exports, and a styled report
//! for the gold aggregate category with a caption, header/cell styling,
//! currency formatting on monetary columns, and a three-color gradient on
//! delay columns.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::clean::{is_delay_column, is_monetary_column};
use crate::table::{ColumnKind, Table};

/// Escapes text for HTML element and attribute content.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes a table as plain HTML table markup with a header row.
pub fn write_html(table: &Table, path: &Path) -> Result<()> {
    let mut out = String::new();
    out.push_str("<table border=\"1\">\n  <thead>\n    <tr>\n");
    for name in table.column_names() {
        out.push_str(&format!("      <th>{}</th>\n", escape_html(name)));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in &table.rows {
        out.push_str("    <tr>\n");
        for cell in row {
            out.push_str(&format!(
                "      <td>{}</td>\n",
                escape_html(&cell.to_display())
            ));
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n");

    fs::write(path, out)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

const REPORT_CSS: &str = "\
    body { font-family: sans-serif; }\n\
    table { border-collapse: collapse; }\n\
    caption { caption-side: top; font-size: 1.2em; font-weight: bold; padding: 8px; }\n\
    th { background-color: #1f4e79; color: #ffffff; padding: 6px 10px; border: 1px solid #cccccc; }\n\
    td { padding: 4px 10px; border: 1px solid #cccccc; }\n\
    td.num { text-align: right; }\n";

/// Writes a table as a styled, self-contained HTML report (gold aggregate
/// category).
///
/// Monetary columns are rendered with currency formatting; delay columns get
/// a green-to-red background gradient over their numeric range. A delay
/// column with no numeric values is skipped with a warning, keeping the
/// gradient best-effort.
pub fn write_styled_html(table: &Table, path: &Path) -> Result<()> {
    let scales: Vec<Option<ColorScale>> = table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            if !is_delay_column(&column.name) {
                return None;
            }
            let values: Vec<f64> = table.rows.iter().filter_map(|r| r[idx].as_f64()).collect();
            let scale = ColorScale::from_values(&values);
            if scale.is_none() {
                warn!(
                    "View {}: delay column {} has no numeric values, skipping gradient",
                    table.view, column.name
                );
            }
            scale
        })
        .collect();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&table.view)));
    out.push_str(&format!("<style>\n{}</style>\n", REPORT_CSS));
    out.push_str("</head>\n<body>\n<table>\n");
    out.push_str(&format!(
        "  <caption>{}</caption>\n",
        escape_html(&table.view)
    ));

    out.push_str("  <thead>\n    <tr>\n");
    for name in table.column_names() {
        out.push_str(&format!("      <th>{}</th>\n", escape_html(name)));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in &table.rows {
        out.push_str("    <tr>\n");
        for (idx, cell) in row.iter().enumerate() {
            let column = &table.columns[idx];
            let text = if is_monetary_column(&column.name) {
                match cell.as_f64() {
                    Some(v) => format_currency(v),
                    None => cell.to_display(),
                }
            } else {
                cell.to_display()
            };

            let class = match column.kind {
                ColumnKind::Int | ColumnKind::Float => " class=\"num\"",
                _ => "",
            };
            let style = match (&scales[idx], cell.as_f64()) {
                (Some(scale), Some(v)) => {
                    format!(" style=\"background-color: {}\"", scale.color_for(v))
                }
                _ => String::new(),
            };

            out.push_str(&format!(
                "      <td{}{}>{}</td>\n",
                class,
                style,
                escape_html(&text)
            ));
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n</body>\n</html>\n");

    fs::write(path, out)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

/// Formats a float as a dollar amount with thousands separators,
/// e.g. `1234.56` -> `$1,234.56`.
pub fn format_currency(v: f64) -> String {
    let negative = v < 0.0;
    let abs = v.abs();
    let mut whole = abs.trunc() as i64;
    let mut cents = ((abs - abs.trunc()) * 100.0).round() as i64;
    if cents >= 100 {
        whole += 1;
        cents = 0;
    }
    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        cents
    )
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// Excel-style three-color scale endpoints: green, yellow, red
const SCALE_LOW: (u8, u8, u8) = (0x63, 0xbe, 0x7b);
const SCALE_MID: (u8, u8, u8) = (0xff, 0xeb, 0x84);
const SCALE_HIGH: (u8, u8, u8) = (0xf8, 0x69, 0x6b);

/// Maps a numeric range onto a green-yellow-red background gradient.
struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    fn from_values(values: &[f64]) -> Option<Self> {
        let mut iter = values.iter().copied().filter(|v| v.is_finite());
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    fn color_for(&self, v: f64) -> String {
        let t = if self.max > self.min {
            ((v - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let (from, to, local) = if t <= 0.5 {
            (SCALE_LOW, SCALE_MID, t * 2.0)
        } else {
            (SCALE_MID, SCALE_HIGH, (t - 0.5) * 2.0)
        };
        format!(
            "#{:02x}{:02x}{:02x}",
            lerp(from.0, to.0, local),
            lerp(from.1, to.1, local),
            lerp(from.2, to.2, local)
        )
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}
