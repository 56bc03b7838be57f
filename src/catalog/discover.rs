//! View discovery.

use sqlx::postgres::PgPool;

use crate::error_handling::CatalogError;

/// Returns the names of all views in the given schema, ordered
/// lexicographically.
///
/// The catalog (`information_schema.views`) is the source of truth: the set
/// of views can change between runs, and files from earlier runs are never
/// cleaned up.
///
/// # Errors
///
/// Propagates catalog query failures; there is no retry.
pub async fn discover_views(pool: &PgPool, schema: &str) -> Result<Vec<String>, CatalogError> {
    let views = sqlx::query_scalar::<_, String>(
        "SELECT table_name
         FROM information_schema.views
         WHERE table_schema = $1
         ORDER BY table_name",
    )
    .bind(schema)
    .fetch_all(pool)
    .await?;

    Ok(views)
}
