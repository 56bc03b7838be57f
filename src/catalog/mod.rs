//! Warehouse catalog access.
//!
//! Connection settings, view discovery over `information_schema.views`, and
//! per-view row fetching into the [`Table`](crate::table::Table) model.

mod discover;
mod fetch;
mod settings;

pub use discover::discover_views;
pub use fetch::{fetch_view, quote_ident};
pub use settings::{init_db_pool, DbSettings};
