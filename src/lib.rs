//! warehouse_export library: view discovery and multi-format export
//!
//! This library discovers the views of a warehouse schema tier (bronze,
//! silver, gold), fetches a bounded sample of rows from each, and writes
//! every view to CSV, HTML, Excel, and Markdown reports under a
//! deterministic directory tree, plus a static index over the gold
//! aggregate HTML reports.
//!
//! # Example
//!
//! ```no_run
//! use warehouse_export::{run_export, Config, Schema};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     schema: Schema::Gold,
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!(
//!     "Exported {} of {} views ({} failed)",
//!     report.exported, report.views_found, report.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime and reads database credentials
//! (`DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`) from the
//! environment.

#![warn(missing_docs)]

pub mod catalog;
pub mod clean;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod run;
pub mod table;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Schema};
pub use run::{run_export, ExportReport};
