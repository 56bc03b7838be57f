//! Export functionality.
//!
//! One file per output format, a deterministic target-path scheme, the
//! gold-tier view classification, and the static report index. All
//! renderers consume the [`Table`](crate::table::Table) model and are
//! independent of each other: a failure in one format does not block the
//! others for the same view.

mod csv;
mod html;
mod index;
mod markdown;
mod target;
mod xlsx;

pub use self::csv::write_csv;
pub use html::{escape_html, write_html, write_styled_html};
pub use index::build_index;
pub use markdown::write_markdown;
pub use target::target_path;
pub use xlsx::write_excel;

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::warn;

use crate::config::{Schema, AGG_VIEW_KEYWORD};
use crate::table::Table;

/// Output format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, header row, no index column
    Csv,
    /// HTML table markup (styled for gold aggregate reports)
    Html,
    /// Excel workbook, single sheet
    Excel,
    /// Markdown pipe table
    Markdown,
}

impl ExportFormat {
    /// All four formats, the default when none are requested explicitly.
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::Csv,
            ExportFormat::Html,
            ExportFormat::Excel,
            ExportFormat::Markdown,
        ]
    }

    /// Directory segment for this format in the output tree.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Excel => "excel",
            ExportFormat::Markdown => "markdown",
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Gold-tier output category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Pre-aggregated monthly summaries
    Agg,
    /// Row-level detail
    Granular,
}

impl Category {
    /// Directory segment for this category in the output tree.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Agg => "agg",
            Category::Granular => "granular",
        }
    }
}

/// Classifies a gold view by name: views containing "monthly"
/// (case-insensitive) are aggregate summaries, everything else is granular.
pub fn classify(view_name: &str) -> Category {
    if view_name.to_lowercase().contains(AGG_VIEW_KEYWORD) {
        Category::Agg
    } else {
        Category::Granular
    }
}

/// Renders a table to one format at the given path.
///
/// `styled` selects the decorated HTML variant used for gold aggregate
/// reports; it has no effect on the other formats.
pub fn render(table: &Table, format: ExportFormat, path: &Path, styled: bool) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(table, path),
        ExportFormat::Html => {
            if styled {
                write_styled_html(table, path)
            } else {
                write_html(table, path)
            }
        }
        ExportFormat::Excel => write_excel(table, path),
        ExportFormat::Markdown => write_markdown(table, path),
    }
}

/// Outcome of rendering one view to its requested formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Formats written successfully.
    pub written: usize,
    /// Formats that failed (each logged with the view name).
    pub failed: usize,
}

/// Renders a table to every requested format under the output tree.
///
/// Formats are independent: a failed write is logged with the view name and
/// the remaining formats still run. Parent directories are created as
/// needed, and the styled HTML variant is selected for the gold aggregate
/// category.
pub fn render_formats(
    table: &Table,
    out_dir: &Path,
    schema: Schema,
    category: Option<Category>,
    formats: &[ExportFormat],
) -> RenderOutcome {
    let styled = category == Some(Category::Agg);
    let mut outcome = RenderOutcome {
        written: 0,
        failed: 0,
    };
    for format in formats {
        let path = target_path(out_dir, schema, category, *format, &table.view);
        match write_one(table, *format, &path, styled) {
            Ok(()) => outcome.written += 1,
            Err(e) => {
                outcome.failed += 1;
                warn!("{} export failed for {}: {:#}", format, table.view, e);
            }
        }
    }
    outcome
}

fn write_one(table: &Table, format: ExportFormat, path: &Path, styled: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    render(table, format, path, styled)
}
