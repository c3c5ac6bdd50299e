//! Thin wrappers over the DOM scroll APIs.
//!
//! All helpers fail soft: a missing window or element is logged and ignored.

use contracts::enums::Section;
use contracts::shared::backoff::Backoff;
use contracts::shared::navigation::SectionExtent;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::request_animation_frame;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Current vertical scroll offset, 0 when unavailable
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scroll the element with `anchor_id` into view.
/// Returns false when the element is not in the current render.
pub fn scroll_to_anchor(anchor_id: &str) -> bool {
    let Some(element) = element_by_id(anchor_id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Scroll now, logging a warning if the anchor is missing
pub fn scroll_to_anchor_or_warn(anchor_id: &str) {
    if !scroll_to_anchor(anchor_id) {
        log::warn!("Navigation target '#{}' is not rendered, scroll skipped", anchor_id);
    }
}

/// Scroll once the next frame has rendered, polling with backoff until the
/// anchor exists.
pub fn scroll_to_anchor_after_render(anchor_id: &'static str, backoff: Backoff) {
    request_animation_frame(move || {
        spawn_local(async move {
            if scroll_to_anchor(anchor_id) {
                return;
            }
            for delay in backoff.delays() {
                TimeoutFuture::new(delay).await;
                if scroll_to_anchor(anchor_id) {
                    return;
                }
            }
            log::warn!(
                "Navigation target '#{}' did not appear after {} attempts",
                anchor_id,
                backoff.max_attempts
            );
        });
    });
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Laid-out extents of the sections currently in the document
pub fn section_extents() -> Vec<SectionExtent> {
    Section::all()
        .into_iter()
        .filter_map(|section| {
            let element = element_by_id(section.anchor_id())?;
            let element: HtmlElement = element.dyn_into().ok()?;
            Some(SectionExtent {
                section,
                offset_top: f64::from(element.offset_top()),
                offset_height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

/// Current year from the browser clock
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
