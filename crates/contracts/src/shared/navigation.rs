//! Active-section tracking.
//!
//! The active section changes either by an explicit navigation request or by
//! sampling the scroll position against the laid-out section extents.

use crate::enums::Section;

/// Distance below the viewport top used to probe for the current section
pub const DEFAULT_SCROLL_LOOKAHEAD: f64 = 100.0;

/// Scroll offset after which the header collapses into the floating bar
pub const DEFAULT_HEADER_CONDENSE_THRESHOLD: f64 = 50.0;

/// Vertical extent of a rendered section: `[offset_top, offset_top + offset_height)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionExtent {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.offset_top + self.offset_height
    }
}

/// Request to smoothly scroll the viewport to a section anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub section: Section,
}

impl ScrollRequest {
    pub fn anchor_id(&self) -> &'static str {
        self.section.anchor_id()
    }
}

/// Section under the probe line.
///
/// When extents overlap, the section earliest in `Section::all()` wins;
/// extents are looked up by section, so their slice order does not matter.
pub fn resolve_active_section(
    scroll_y: f64,
    lookahead: f64,
    extents: &[SectionExtent],
) -> Option<Section> {
    let probe = scroll_y + lookahead;
    Section::all().into_iter().find(|section| {
        extents
            .iter()
            .any(|extent| extent.section == *section && extent.contains(probe))
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationTracker {
    active: Section,
    lookahead: f64,
}

impl Default for NavigationTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_LOOKAHEAD)
    }
}

impl NavigationTracker {
    pub fn new(lookahead: f64) -> Self {
        Self {
            active: Section::default(),
            lookahead,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Explicit navigation: activate the section and ask for exactly one scroll
    pub fn navigate(&mut self, section: Section) -> ScrollRequest {
        self.active = section;
        ScrollRequest { section }
    }

    /// Activate without scrolling (e.g. the page was already scrolled there)
    pub fn set_active(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }

    /// Recompute from a scroll sample. Keeps the current section when the
    /// probe hits no extent. Returns whether the active section changed.
    pub fn on_scroll(&mut self, scroll_y: f64, extents: &[SectionExtent]) -> bool {
        match resolve_active_section(scroll_y, self.lookahead, extents) {
            Some(section) => self.set_active(section),
            None => false,
        }
    }
}

pub fn header_condensed(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(section: Section, top: f64, height: f64) -> SectionExtent {
        SectionExtent {
            section,
            offset_top: top,
            offset_height: height,
        }
    }

    fn page() -> Vec<SectionExtent> {
        vec![
            extent(Section::Home, 0.0, 800.0),
            extent(Section::About, 800.0, 600.0),
            extent(Section::Categories, 1400.0, 900.0),
            extent(Section::Portfolio, 2300.0, 1200.0),
            extent(Section::Contact, 3500.0, 700.0),
        ]
    }

    #[test]
    fn test_navigate_sets_section_and_requests_one_scroll() {
        for section in Section::all() {
            let mut tracker = NavigationTracker::default();
            let request = tracker.navigate(section);
            assert_eq!(tracker.active(), section);
            assert_eq!(request.anchor_id(), section.anchor_id());
        }
    }

    #[test]
    fn test_lookahead_is_applied() {
        let extents = page();
        assert_eq!(resolve_active_section(0.0, 100.0, &extents), Some(Section::Home));
        // 699 + 100 is still inside home
        assert_eq!(resolve_active_section(699.0, 100.0, &extents), Some(Section::Home));
        // 700 + 100 hits the top edge of about, which is inclusive
        assert_eq!(resolve_active_section(700.0, 100.0, &extents), Some(Section::About));
        assert_eq!(resolve_active_section(3450.0, 100.0, &extents), Some(Section::Contact));
    }

    #[test]
    fn test_overlap_prefers_earlier_section() {
        let extents = vec![
            extent(Section::Portfolio, 1000.0, 500.0),
            extent(Section::Categories, 900.0, 400.0),
        ];
        assert_eq!(resolve_active_section(1100.0, 0.0, &extents), Some(Section::Categories));
        assert_eq!(resolve_active_section(1350.0, 0.0, &extents), Some(Section::Portfolio));
    }

    #[test]
    fn test_scroll_outside_every_extent_keeps_state() {
        let mut tracker = NavigationTracker::default();
        tracker.navigate(Section::About);
        assert!(!tracker.on_scroll(10_000.0, &page()));
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_on_scroll_reports_changes() {
        let mut tracker = NavigationTracker::default();
        let extents = page();
        assert!(!tracker.on_scroll(0.0, &extents));
        assert!(tracker.on_scroll(2500.0, &extents));
        assert_eq!(tracker.active(), Section::Portfolio);
        assert!(!tracker.on_scroll(2600.0, &extents));
    }

    #[test]
    fn test_header_condensed() {
        assert!(!header_condensed(0.0, 50.0));
        assert!(!header_condensed(50.0, 50.0));
        assert!(header_condensed(51.0, 50.0));
    }
}
