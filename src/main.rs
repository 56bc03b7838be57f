//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `warehouse_export` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use warehouse_export::initialization::init_logger_with;
use warehouse_export::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so database
    // credentials don't have to be exported manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the export using the library
    match run_export(config).await {
        Ok(report) => {
            println!(
                "✅ Exported {} of {} view{} from schema {} ({} failed) in {:.1}s",
                report.exported,
                report.views_found,
                if report.views_found == 1 { "" } else { "s" },
                report.schema,
                report.failed,
                report.elapsed_seconds
            );
            println!("Reports written under {}", report.out_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("warehouse_export error: {:#}", e);
            process::exit(1);
        }
    }
}
