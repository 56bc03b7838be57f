//! Output path derivation.

use std::path::{Path, PathBuf};

use crate::config::Schema;

use super::{Category, ExportFormat};

/// Derives the output path for one (view, format) pair.
///
/// Bronze and silver exports land at `<out_dir>/<tier>/<format>/<view>.<ext>`;
/// gold exports insert the category segment:
/// `<out_dir>/gold/<category>/<format>/<view>.<ext>`.
///
/// The mapping is deterministic and carries no overwrite protection:
/// re-running replaces prior output, and views dropped from the catalog
/// leave orphaned files behind.
pub fn target_path(
    out_dir: &Path,
    schema: Schema,
    category: Option<Category>,
    format: ExportFormat,
    view: &str,
) -> PathBuf {
    let mut path = out_dir.join(schema.tier_name());
    if let Some(category) = category {
        path.push(category.dir_name());
    }
    path.push(format.dir_name());
    path.push(format!("{}.{}", view, format.extension()));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bronze_path_has_no_category() {
        let path = target_path(
            Path::new("reports"),
            Schema::Bronze,
            None,
            ExportFormat::Csv,
            "orders_raw",
        );
        assert_eq!(path, Path::new("reports/bronze/csv/orders_raw.csv"));
    }

    #[test]
    fn test_gold_path_includes_category() {
        let path = target_path(
            Path::new("reports"),
            Schema::Gold,
            Some(Category::Agg),
            ExportFormat::Html,
            "sales_monthly_summary",
        );
        assert_eq!(
            path,
            Path::new("reports/gold/agg/html/sales_monthly_summary.html")
        );
    }

    #[test]
    fn test_excel_extension_is_xlsx() {
        let path = target_path(
            Path::new("out"),
            Schema::Silver,
            None,
            ExportFormat::Excel,
            "customers",
        );
        assert_eq!(path, Path::new("out/silver/excel/customers.xlsx"));
    }
}
