//! Page-wide state owned by the root `App`.
//!
//! Children never get the context itself: `App` hands them read-only
//! signals and mutator callbacks built from it.

use contracts::enums::{Category, Section};
use contracts::shared::backoff::Backoff;
use contracts::shared::site_state::SiteState;
use leptos::prelude::*;

use crate::shared::dom;
use crate::shared::query::PageQuery;

#[derive(Clone, Copy)]
pub struct SiteContext {
    state: RwSignal<SiteState>,
}

impl SiteContext {
    pub fn new(scroll_lookahead: f64) -> Self {
        Self {
            state: RwSignal::new(SiteState::new(scroll_lookahead)),
        }
    }

    pub fn active_section(&self) -> Signal<Section> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.active()))
    }

    pub fn selected_category(&self) -> Signal<Option<Category>> {
        let state = self.state;
        // scroll samples rewrite the state; the filter only cares about real changes
        Memo::new(move |_| state.with(|s| s.selected_category())).into()
    }

    /// Navigation click: activate the section and scroll to its anchor
    pub fn navigate(&self, section: Section) {
        log::debug!("navigate: {}", section);
        let request = self.state.try_update(|s| s.navigate(section));
        if let Some(request) = request {
            dom::scroll_to_anchor_or_warn(request.anchor_id());
        }
    }

    /// Category card click: filter the portfolio, activate it and scroll to
    /// it once the filtered grid has rendered
    pub fn select_category(&self, category: Category) {
        log::debug!("select_category: {}", category);
        let request = self.state.try_update(|s| s.select_category(category));
        if let Some(request) = request {
            dom::scroll_to_anchor_after_render(request.anchor_id(), Backoff::default());
        }
    }

    /// Scroll sample: re-derive the active section from the layout.
    /// Subscribers are only notified when the section actually changes.
    pub fn sync_with_scroll(&self) {
        let scroll_y = dom::scroll_y();
        let extents = dom::section_extents();
        self.state.maybe_update(|s| s.on_scroll(scroll_y, &extents));
    }

    /// Restore state from `?section=&category=` and keep the query in sync
    pub fn init_query_integration(&self) {
        let query = PageQuery::current();
        if let Some(category) = query.category {
            self.select_category(category);
        } else if let Some(section) = query.section {
            self.state.update(|s| {
                s.set_active(section);
            });
            dom::scroll_to_anchor_after_render(section.anchor_id(), Backoff::default());
        }

        let state = self.state;
        Effect::new(move |_| {
            let query = state.with(|s| PageQuery {
                section: Some(s.active()).filter(|section| *section != Section::Home),
                category: s.selected_category(),
            });
            query.replace_current();
        });
    }
}
