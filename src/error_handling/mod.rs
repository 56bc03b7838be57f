//! Error handling.
//!
//! Setup failures are fatal and typed ([`InitializationError`]); per-view
//! failures surface as [`CatalogError`] or `anyhow` errors and are caught
//! and logged by the run loop, which then moves on to the next view.

mod types;

pub use types::{CatalogError, InitializationError};
