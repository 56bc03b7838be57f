//! Configuration constants.
//!
//! Defaults and fixed conventions used throughout the exporter: the preview
//! row cap, output directory naming, and the column-name keywords driving
//! the gold-tier cleaning and styling.

/// Default row cap for preview exports.
///
/// Most exports are samples, not full dumps; `--full` removes the cap for
/// the gold full variant.
pub const DEFAULT_ROW_LIMIT: u32 = 25;

/// Default root directory for the generated report tree.
pub const DEFAULT_OUT_DIR: &str = "reports";

/// Filename of the generated report index.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Column-name substrings (matched case-insensitively) that mark a column
/// as monetary. Monetary string values get currency symbols and thousands
/// separators stripped during cleaning, and currency formatting in styled
/// HTML output.
pub const MONETARY_COLUMN_KEYWORDS: &[&str] = &["cost", "revenue", "profit"];

/// Column-name substring (matched case-insensitively) that marks a column
/// for the color gradient in styled HTML output.
pub const DELAY_COLUMN_KEYWORD: &str = "delay";

/// View-name substring (matched case-insensitively) that classifies a gold
/// view as a pre-aggregated monthly summary rather than row-level detail.
pub const AGG_VIEW_KEYWORD: &str = "monthly";
