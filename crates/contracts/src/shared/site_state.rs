//! Page-wide state shared by the navigation bar, the category cards and the
//! portfolio grid.
//!
//! Picking a category is a single transition: the portfolio filter and the
//! active section move together, and the caller gets one scroll request.

use crate::enums::{Category, Section};
use crate::shared::navigation::{NavigationTracker, ScrollRequest, SectionExtent};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteState {
    tracker: NavigationTracker,
    selected_category: Option<Category>,
}

impl SiteState {
    pub fn new(scroll_lookahead: f64) -> Self {
        Self {
            tracker: NavigationTracker::new(scroll_lookahead),
            selected_category: None,
        }
    }

    pub fn active(&self) -> Section {
        self.tracker.active()
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn navigate(&mut self, section: Section) -> ScrollRequest {
        self.tracker.navigate(section)
    }

    /// Filter the portfolio to `category` and make the portfolio active
    pub fn select_category(&mut self, category: Category) -> ScrollRequest {
        self.selected_category = Some(category);
        self.tracker.navigate(Section::Portfolio)
    }

    pub fn set_active(&mut self, section: Section) -> bool {
        self.tracker.set_active(section)
    }

    /// Scroll sampling never touches the category filter
    pub fn on_scroll(&mut self, scroll_y: f64, extents: &[SectionExtent]) -> bool {
        self.tracker.on_scroll(scroll_y, extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_portfolio_item::PortfolioCatalog;
    use crate::projections::p900_portfolio_view::filter;

    fn catalog() -> PortfolioCatalog {
        PortfolioCatalog::from_assets([
            (Category::Poster, "Poster/Done/p1.png", "p1"),
            (Category::Menu, "Menu/Done/m1.png", "m1"),
            (Category::Website, "Website/Done/w1.png", "w1"),
            (Category::Poster, "Poster/Done/p2.png", "p2"),
            (Category::Logo, "logo/Done/l1.png", "l1"),
            (Category::Shooting, "Shooting/Done/s1.jpg", "s1"),
        ])
    }

    #[test]
    fn test_select_category_filters_and_activates_portfolio() {
        let catalog = catalog();
        for category in Category::all() {
            let mut state = SiteState::default();
            let request = state.select_category(category);

            assert_eq!(state.selected_category(), Some(category));
            assert_eq!(state.active(), Section::Portfolio);
            assert_eq!(request.section, Section::Portfolio);
            assert_eq!(request.anchor_id(), "portfolio");

            let expected: Vec<_> = catalog
                .items()
                .iter()
                .filter(|item| item.category == category)
                .collect();
            assert_eq!(filter(&catalog, state.selected_category()), expected);
        }
    }

    #[test]
    fn test_navigate_keeps_selected_category() {
        let mut state = SiteState::default();
        state.select_category(Category::Menu);
        let request = state.navigate(Section::Contact);
        assert_eq!(request.anchor_id(), "contact");
        assert_eq!(state.active(), Section::Contact);
        assert_eq!(state.selected_category(), Some(Category::Menu));
    }

    #[test]
    fn test_scroll_keeps_selected_category() {
        let mut state = SiteState::new(0.0);
        state.select_category(Category::Logo);
        let extents = [SectionExtent {
            section: Section::About,
            offset_top: 0.0,
            offset_height: 500.0,
        }];
        assert!(state.on_scroll(10.0, &extents));
        assert_eq!(state.active(), Section::About);
        assert_eq!(state.selected_category(), Some(Category::Logo));
    }
}
