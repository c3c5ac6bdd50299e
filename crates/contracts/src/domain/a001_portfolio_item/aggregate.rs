use serde::{Deserialize, Serialize};

use crate::enums::Category;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a portfolio item, unique within the page session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PortfolioItemId(pub u32);

impl PortfolioItemId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One displayed work sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub title: String,
    pub category: Category,
    /// Opaque locator handed to `<img src>`
    pub image: String,
}

/// Derive a display title from an asset path: file stem with `-` and `_`
/// turned into spaces.
///
/// Example: `"Poster/Done/grand_opening-2024.png"` -> `"grand opening 2024"`
pub fn title_from_path(path: &str) -> String {
    let file_name = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
    let stem = match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    };
    stem.replace(|c: char| c == '-' || c == '_', " ")
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only collection of portfolio items assembled from discovered assets.
///
/// Items keep discovery order; ids are assigned from 1 upward in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioCatalog {
    items: Vec<PortfolioItem>,
}

impl PortfolioCatalog {
    /// Build the catalog from `(category, path, locator)` triples.
    ///
    /// An empty locator falls back to the path itself.
    pub fn from_assets<'a, I>(assets: I) -> Self
    where
        I: IntoIterator<Item = (Category, &'a str, &'a str)>,
    {
        let items = assets
            .into_iter()
            .enumerate()
            .map(|(index, (category, path, locator))| PortfolioItem {
                id: PortfolioItemId(index as u32 + 1),
                title: title_from_path(path),
                category,
                image: if locator.is_empty() {
                    path.to_string()
                } else {
                    locator.to_string()
                },
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: PortfolioItemId) -> Option<&PortfolioItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of works available for a category
    pub fn count(&self, category: Category) -> usize {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path("Poster/Done/grand_opening-2024.png"), "grand opening 2024");
        assert_eq!(title_from_path("kopi.jpeg"), "kopi");
        assert_eq!(title_from_path("Logo/Done/no_extension"), "no extension");
        assert_eq!(title_from_path("Menu/Done/.hidden"), ".hidden");
        assert_eq!(title_from_path("a\\b\\c-d.JPG"), "c d");
    }

    #[test]
    fn test_ids_are_monotonic_in_discovery_order() {
        let catalog = PortfolioCatalog::from_assets([
            (Category::Menu, "Menu/Done/b.png", "/assets/b.png"),
            (Category::Poster, "Poster/Done/a.png", "/assets/a.png"),
            (Category::Menu, "Menu/Done/c.png", ""),
        ]);

        let ids: Vec<u32> = catalog.items().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.items()[0].title, "b");
        assert_eq!(catalog.items()[2].image, "Menu/Done/c.png");
        assert_eq!(catalog.get(PortfolioItemId(2)).map(|i| i.category), Some(Category::Poster));
        assert_eq!(catalog.get(PortfolioItemId(9)), None);
    }

    #[test]
    fn test_count_per_category() {
        let catalog = PortfolioCatalog::from_assets([
            (Category::Poster, "p1.png", "p1"),
            (Category::Poster, "p2.png", "p2"),
            (Category::Logo, "l1.png", "l1"),
        ]);
        assert_eq!(catalog.count(Category::Poster), 2);
        assert_eq!(catalog.count(Category::Logo), 1);
        assert_eq!(catalog.count(Category::Shooting), 0);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PortfolioCatalog::from_assets(std::iter::empty());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
