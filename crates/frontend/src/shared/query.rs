//! Deep links: mirrors the active section and selected category into the
//! query string (`?section=portfolio&category=poster`).

use contracts::enums::{Category, Section};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Raw keys as they appear in the URL, validated one by one
#[derive(Debug, Default, Deserialize)]
struct RawPageQuery {
    #[serde(default)]
    section: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl PageQuery {
    /// Parse `location.search`. Each key is validated on its own, so an
    /// unknown value only drops that key.
    pub fn parse(search: &str) -> Self {
        let search = search.trim_start_matches('?');
        if search.is_empty() {
            return Self::default();
        }
        let raw: RawPageQuery = serde_qs::from_str(search).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed query '{}': {}", search, e);
            RawPageQuery::default()
        });

        let section = raw.section.as_deref().and_then(|value| {
            let section = Section::from_anchor_id(value);
            if section.is_none() {
                log::warn!("Ignoring unknown section '{}'", value);
            }
            section
        });
        let category = raw.category.as_deref().and_then(|value| {
            let category = Category::from_code(value);
            if category.is_none() {
                log::warn!("Ignoring unknown category '{}'", value);
            }
            category
        });
        Self { section, category }
    }

    /// `?section=...&category=...`, or an empty string when nothing is set
    pub fn to_search(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) if !qs.is_empty() => format!("?{}", qs),
            _ => String::new(),
        }
    }

    /// Read the query of the current page
    pub fn current() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse(&search)
    }

    /// Replace the current history entry if the query differs
    pub fn replace_current(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let current_search = window.location().search().unwrap_or_default();
        let new_search = self.to_search();
        if current_search == new_search {
            return;
        }
        // an empty search would leave the old query in place
        let url = if new_search.is_empty() {
            window.location().pathname().unwrap_or_else(|_| "/".to_string())
        } else {
            new_search
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            PageQuery::parse("?section=contact&category=menu"),
            PageQuery {
                section: Some(Section::Contact),
                category: Some(Category::Menu),
            }
        );
        assert_eq!(PageQuery::parse(""), PageQuery::default());
        assert_eq!(PageQuery::parse("?"), PageQuery::default());
    }

    #[test]
    fn test_parse_unknown_value_is_ignored() {
        assert_eq!(PageQuery::parse("?category=billboard"), PageQuery::default());
    }

    #[test]
    fn test_parse_unknown_value_keeps_other_keys() {
        assert_eq!(
            PageQuery::parse("?section=contact&category=billboard"),
            PageQuery {
                section: Some(Section::Contact),
                category: None,
            }
        );
        assert_eq!(
            PageQuery::parse("?section=lobby&category=logo"),
            PageQuery {
                section: None,
                category: Some(Category::Logo),
            }
        );
    }

    #[test]
    fn test_parse_ignores_extra_keys() {
        assert_eq!(
            PageQuery::parse("?utm_source=mail&section=about"),
            PageQuery {
                section: Some(Section::About),
                category: None,
            }
        );
    }

    #[test]
    fn test_to_search() {
        let query = PageQuery {
            section: Some(Section::Portfolio),
            category: Some(Category::Logo),
        };
        assert_eq!(query.to_search(), "?section=portfolio&category=logo");
        assert_eq!(PageQuery::default().to_search(), "");
    }
}
