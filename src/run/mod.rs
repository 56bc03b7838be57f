//! Export run orchestration.
//!
//! Flat control flow: discover the views of the requested schema, then for
//! each view fetch, clean (gold only), and render each requested format.
//! Setup failures abort the run; per-view failures are logged with the view
//! name and the loop continues. Finally the report index is built for the
//! gold aggregate category.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use sqlx::postgres::PgPool;

use crate::catalog::{discover_views, fetch_view, init_db_pool, DbSettings};
use crate::clean::clean_for_spreadsheet;
use crate::config::{Config, Schema};
use crate::export::{build_index, classify, render_formats, Category, ExportFormat};

/// Results of a completed export run.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Database schema the views came from.
    pub schema: String,
    /// Number of views found in the catalog.
    pub views_found: usize,
    /// Number of views exported (at least one format written).
    pub exported: usize,
    /// Number of views that failed entirely.
    pub failed: usize,
    /// Root of the generated report tree.
    pub out_dir: PathBuf,
    /// Elapsed time in seconds.
    pub elapsed_seconds: f64,
}

/// Runs an export with the provided configuration.
///
/// This is the main entry point for the library. Database credentials are
/// read from the environment; see [`DbSettings::from_env`].
///
/// # Errors
///
/// Returns an error for fatal setup problems (environment, connection,
/// catalog query). Per-view export failures do not fail the run; they are
/// logged and counted in the report.
pub async fn run_export(config: Config) -> Result<ExportReport> {
    let start = Instant::now();

    let settings =
        DbSettings::from_env().context("Failed to load database settings from environment")?;
    let pool = init_db_pool(&settings)
        .await
        .context("Failed to connect to database")?;

    let schema_name = config.schema_name();
    let views = discover_views(&pool, &schema_name)
        .await
        .with_context(|| format!("Failed to discover views in schema {}", schema_name))?;
    info!(
        "Discovered {} view(s) in schema {}",
        views.len(),
        schema_name
    );

    let formats = config.effective_formats();
    let row_limit = config.effective_row_limit();

    let mut exported = 0;
    let mut failed = 0;
    for view in &views {
        match export_view(&pool, &config, &schema_name, view, row_limit, &formats).await {
            Ok(rows) => {
                exported += 1;
                info!("Exported {} ({} rows)", view, rows);
            }
            Err(e) => {
                failed += 1;
                warn!("Failed to export {}: {:#}", view, e);
            }
        }
    }

    if config.schema == Schema::Gold && formats.contains(&ExportFormat::Html) {
        let agg_html_dir = config
            .out_dir
            .join(Schema::Gold.tier_name())
            .join(Category::Agg.dir_name())
            .join(ExportFormat::Html.dir_name());
        // Nothing to index when no aggregate view produced HTML
        if agg_html_dir.is_dir() {
            let index_path =
                build_index(&agg_html_dir).context("Failed to build report index")?;
            info!("Wrote report index {}", index_path.display());
        }
    }

    pool.close().await;

    Ok(ExportReport {
        schema: schema_name,
        views_found: views.len(),
        exported,
        failed,
        out_dir: config.out_dir.clone(),
        elapsed_seconds: start.elapsed().as_secs_f64(),
    })
}

/// Exports a single view to every requested format.
///
/// Formats are independent: a failed format write is logged and the
/// remaining formats still run. The view only counts as failed when the
/// fetch fails or no format could be written at all.
async fn export_view(
    pool: &PgPool,
    config: &Config,
    schema_name: &str,
    view: &str,
    row_limit: Option<u32>,
    formats: &[ExportFormat],
) -> Result<usize> {
    let mut table = fetch_view(pool, schema_name, view, row_limit)
        .await
        .context("query failed")?;

    let category = match config.schema {
        Schema::Gold => Some(classify(view)),
        _ => None,
    };
    if config.schema == Schema::Gold {
        clean_for_spreadsheet(&mut table);
    }

    let outcome = render_formats(&table, &config.out_dir, config.schema, category, formats);
    if outcome.failed > 0 && outcome.written == 0 {
        anyhow::bail!("all {} format write(s) failed", outcome.failed);
    }

    Ok(table.row_count())
}
