use serde::{Deserialize, Serialize};

/// Scroll-anchored region of the page.
///
/// Variants are declared in document order, which is also the priority order
/// used when resolving the active section from the scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Categories,
    Portfolio,
    Contact,
}

impl Section {
    /// DOM anchor id of the section element
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Categories => "categories",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Categories => "Services",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Help Center",
        }
    }

    /// All sections in priority order
    pub fn all() -> [Section; 5] {
        [
            Section::Home,
            Section::About,
            Section::Categories,
            Section::Portfolio,
            Section::Contact,
        ]
    }

    /// Sections listed in the header menu (the logo links to `Home`)
    pub fn menu() -> [Section; 4] {
        [
            Section::Categories,
            Section::About,
            Section::Portfolio,
            Section::Contact,
        ]
    }

    pub fn from_anchor_id(id: &str) -> Option<Self> {
        Section::all().into_iter().find(|s| s.anchor_id() == id)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ids_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_anchor_id(section.anchor_id()), Some(section));
        }
        assert_eq!(Section::from_anchor_id("pricing"), None);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_serde_uses_anchor_ids() {
        let json = serde_json::to_string(&Section::Portfolio).unwrap();
        assert_eq!(json, "\"portfolio\"");
    }
}
