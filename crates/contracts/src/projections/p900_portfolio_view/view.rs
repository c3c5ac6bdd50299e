//! Portfolio grid projection: category filter plus the "show more" window.

use crate::domain::a001_portfolio_item::{PortfolioCatalog, PortfolioItem};
use crate::enums::Category;

/// Items shown before "Show More" is pressed
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// All items when no category is selected, otherwise the items of that
/// category. Catalog order is preserved.
pub fn filter(catalog: &PortfolioCatalog, category: Option<Category>) -> Vec<&PortfolioItem> {
    catalog
        .items()
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect()
}

/// Expansion state of the portfolio grid.
///
/// Expansion belongs to one filter: switching category collapses the grid
/// again (see `sync_category`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioView {
    category: Option<Category>,
    expanded: bool,
    preview_limit: usize,
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_LIMIT)
    }
}

impl PortfolioView {
    pub fn new(preview_limit: usize) -> Self {
        Self {
            category: None,
            expanded: false,
            preview_limit,
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Follow the selected category; returns true when the filter changed
    /// and the expansion was reset.
    pub fn sync_category(&mut self, category: Option<Category>) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.expanded = false;
        true
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Filtered items for the current category
    pub fn filtered<'a>(&self, catalog: &'a PortfolioCatalog) -> Vec<&'a PortfolioItem> {
        filter(catalog, self.category)
    }

    /// Items actually rendered in the grid
    pub fn visible<'a>(&self, catalog: &'a PortfolioCatalog) -> Vec<&'a PortfolioItem> {
        let mut items = self.filtered(catalog);
        if !self.expanded {
            items.truncate(self.preview_limit);
        }
        items
    }

    /// Whether the "Show More / Show Less" toggle is offered
    pub fn has_more(&self, catalog: &PortfolioCatalog) -> bool {
        self.filtered(catalog).len() > self.preview_limit
    }

    /// Grid heading, e.g. "Poster Portfolio"
    pub fn heading(&self) -> String {
        match self.category {
            Some(c) => format!("{} Portfolio", c.display_name()),
            None => "Featured Portfolio".to_string(),
        }
    }

    pub fn blurb(&self) -> String {
        match self.category {
            Some(c) => format!(
                "Explore my {} design projects that showcase creativity and professionalism.",
                c.code()
            ),
            None => "A curated selection of my best work across all design categories.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8 items, 3 of them posters
    fn catalog() -> PortfolioCatalog {
        PortfolioCatalog::from_assets([
            (Category::Poster, "Poster/Done/p1.png", "p1"),
            (Category::Menu, "Menu/Done/m1.png", "m1"),
            (Category::Poster, "Poster/Done/p2.png", "p2"),
            (Category::Logo, "logo/Done/l1.png", "l1"),
            (Category::Menu, "Menu/Done/m2.png", "m2"),
            (Category::Signboard, "Signboard/Done/s1.png", "s1"),
            (Category::Poster, "Poster/Done/p3.png", "p3"),
            (Category::Logo, "logo/Done/l2.png", "l2"),
        ])
    }

    fn titles(items: &[&PortfolioItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_no_category_yields_everything() {
        let catalog = catalog();
        assert_eq!(filter(&catalog, None).len(), catalog.len());
    }

    #[test]
    fn test_filter_preserves_order_for_every_category() {
        let catalog = catalog();
        for category in Category::all() {
            let expected: Vec<&PortfolioItem> = catalog
                .items()
                .iter()
                .filter(|i| i.category == category)
                .collect();
            assert_eq!(filter(&catalog, Some(category)), expected);
        }
    }

    #[test]
    fn test_poster_selection_has_no_show_more() {
        let catalog = catalog();
        let mut view = PortfolioView::default();
        view.sync_category(Some(Category::Poster));

        assert_eq!(titles(&view.visible(&catalog)), vec!["p1", "p2", "p3"]);
        assert!(!view.has_more(&catalog));
        assert_eq!(view.heading(), "Poster Portfolio");
    }

    #[test]
    fn test_preview_window_and_toggle() {
        let catalog = catalog();
        let mut view = PortfolioView::default();

        assert!(view.has_more(&catalog));
        assert_eq!(titles(&view.visible(&catalog)), vec!["p1", "m1", "p2", "l1", "m2"]);
        assert_eq!(view.heading(), "Featured Portfolio");

        view.toggle_expanded();
        assert_eq!(view.visible(&catalog).len(), 8);

        view.toggle_expanded();
        assert_eq!(view.visible(&catalog).len(), 5);
    }

    #[test]
    fn test_category_change_collapses() {
        let catalog = catalog();
        let mut view = PortfolioView::new(1);
        view.toggle_expanded();
        assert_eq!(view.visible(&catalog).len(), 8);

        assert!(view.sync_category(Some(Category::Menu)));
        assert!(!view.is_expanded());
        assert_eq!(titles(&view.visible(&catalog)), vec!["m1"]);

        // same category again keeps the expansion
        view.toggle_expanded();
        assert!(!view.sync_category(Some(Category::Menu)));
        assert!(view.is_expanded());
    }

    #[test]
    fn test_empty_category() {
        let catalog = catalog();
        let mut view = PortfolioView::default();
        view.sync_category(Some(Category::Shooting));
        assert!(view.visible(&catalog).is_empty());
        assert!(!view.has_more(&catalog));
    }
}
