//! Configuration types and CLI options.
//!
//! Defines the enums and the `Config` struct used for command-line argument
//! parsing. `Config` doubles as the library entry-point configuration and
//! can be constructed programmatically.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_OUT_DIR, DEFAULT_ROW_LIMIT};
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Warehouse schema tier to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Schema {
    /// Raw ingested data
    Bronze,
    /// Cleaned and conformed data
    Silver,
    /// Business-level marts (gets cleaning, categories, and styled HTML)
    Gold,
}

impl Schema {
    /// Tier name, used both as the default schema name and as the first
    /// output directory segment.
    pub fn tier_name(&self) -> &'static str {
        match self {
            Schema::Bronze => "bronze",
            Schema::Silver => "silver",
            Schema::Gold => "gold",
        }
    }
}

/// Exporter configuration (CLI options).
///
/// Database credentials come from the environment (`DB_HOST`, `DB_PORT`,
/// `DB_NAME`, `DB_USER`, `DB_PASSWORD`), not from flags.
///
/// # Examples
///
/// ```no_run
/// use warehouse_export::{Config, Schema};
///
/// let config = Config {
///     schema: Schema::Gold,
///     full: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "warehouse_export",
    about = "Exports warehouse views to CSV, HTML, Excel, and Markdown reports."
)]
pub struct Config {
    /// Schema tier to export
    #[arg(long, value_enum)]
    pub schema: Schema,

    /// Output formats (comma-separated); all four when omitted
    #[arg(long, value_enum, value_delimiter = ',')]
    pub formats: Vec<ExportFormat>,

    /// Maximum rows fetched per view (preview cap)
    #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
    pub row_limit: u32,

    /// Export all rows, ignoring the row limit
    #[arg(long)]
    pub full: bool,

    /// Root directory for the generated report tree
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Prefix prepended to the tier name to form the database schema name
    /// (e.g. "dbt_" for schemas named dbt_bronze/dbt_silver/dbt_gold)
    #[arg(long, default_value = "")]
    pub schema_prefix: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Database schema name for the catalog query.
    pub fn schema_name(&self) -> String {
        format!("{}{}", self.schema_prefix, self.schema.tier_name())
    }

    /// Row cap for view queries; `None` when `--full` is set.
    pub fn effective_row_limit(&self) -> Option<u32> {
        if self.full {
            None
        } else {
            Some(self.row_limit)
        }
    }

    /// Requested formats, defaulting to all four when none were given.
    pub fn effective_formats(&self) -> Vec<ExportFormat> {
        if self.formats.is_empty() {
            ExportFormat::all().to_vec()
        } else {
            self.formats.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: Schema::Bronze,
            formats: Vec::new(),
            row_limit: DEFAULT_ROW_LIMIT,
            full: false,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            schema_prefix: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
