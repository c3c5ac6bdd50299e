//! Portfolio catalog assembled from the build-time asset table.

use contracts::domain::a001_portfolio_item::PortfolioCatalog;
use contracts::enums::Category;
use once_cell::sync::Lazy;

include!(concat!(env!("OUT_DIR"), "/portfolio_assets.rs"));

/// Catalog of every discovered work sample, grouped in category display order
pub static CATALOG: Lazy<PortfolioCatalog> = Lazy::new(|| {
    let catalog = catalog_from_rows(PORTFOLIO_ASSETS);
    log::debug!("Portfolio catalog: {} items", catalog.len());
    catalog
});

/// Build a catalog from `(category directory, path, locator)` rows.
/// Rows whose directory is not a known category are skipped.
pub fn catalog_from_rows(rows: &[(&str, &str, &str)]) -> PortfolioCatalog {
    for (dir, path, _) in rows {
        if Category::from_dir_name(dir).is_none() {
            log::warn!("Skipping portfolio asset '{}': unknown category '{}'", path, dir);
        }
    }

    let ordered = Category::all().into_iter().flat_map(|category| {
        rows.iter()
            .filter(move |(dir, _, _)| Category::from_dir_name(dir) == Some(category))
            .map(move |(_, path, locator)| (category, *path, *locator))
    });
    PortfolioCatalog::from_assets(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_grouped_by_category_order() {
        let catalog = catalog_from_rows(&[
            ("logo", "logo/Done/mark.png", "assets/portfolio/logo/Done/mark.png"),
            ("poster", "Poster/Done/expo_2024.jpg", "assets/portfolio/Poster/Done/expo_2024.jpg"),
            ("drafts", "Drafts/Done/wip.png", "assets/portfolio/Drafts/Done/wip.png"),
            ("poster", "Poster/Done/sale.png", "assets/portfolio/Poster/Done/sale.png"),
        ]);

        let rows: Vec<(u32, &str, Category)> = catalog
            .items()
            .iter()
            .map(|i| (i.id.value(), i.title.as_str(), i.category))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, "expo 2024", Category::Poster),
                (2, "sale", Category::Poster),
                (3, "mark", Category::Logo),
            ]
        );
    }

    #[test]
    fn test_generated_table_is_consistent() {
        assert!(CATALOG.len() <= PORTFOLIO_ASSETS.len());
    }
}
