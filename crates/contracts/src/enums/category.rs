use serde::{Deserialize, Serialize};

/// Design service offered by the studio, used to tag and filter portfolio work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Poster,
    Menu,
    Signboard,
    Logo,
    Website,
    Shooting,
}

impl Category {
    /// Wire/query code of the category
    pub fn code(&self) -> &'static str {
        match self {
            Category::Poster => "poster",
            Category::Menu => "menu",
            Category::Signboard => "signboard",
            Category::Logo => "logo",
            Category::Website => "website",
            Category::Shooting => "shooting",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Poster => "Poster",
            Category::Menu => "Menu",
            Category::Signboard => "Signboard",
            Category::Logo => "Logo",
            Category::Website => "Website",
            Category::Shooting => "Shooting",
        }
    }

    /// Card blurb in the services grid
    pub fn description(&self) -> &'static str {
        match self {
            Category::Poster => "Eye-catching poster designs for events, promotions, and campaigns",
            Category::Menu => "Elegant menu designs for restaurants, cafes, and food businesses",
            Category::Signboard => "Professional signboard designs for storefronts and businesses",
            Category::Logo => "Memorable logo designs that represent your brand identity",
            Category::Website => "Modern website designs that engage and convert visitors",
            Category::Shooting => "Professional photo shooting & art direction for your brand",
        }
    }

    /// All categories in display order
    pub fn all() -> [Category; 6] {
        [
            Category::Poster,
            Category::Menu,
            Category::Signboard,
            Category::Logo,
            Category::Website,
            Category::Shooting,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Category::all().into_iter().find(|c| c.code() == code)
    }

    /// Lenient lookup for asset directory names (`Poster`, `logo`, ...)
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::from_code(&name.trim().to_ascii_lowercase())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Category::from_code("poster"), Some(Category::Poster));
        assert_eq!(Category::from_code("shooting"), Some(Category::Shooting));
        assert_eq!(Category::from_code("Poster"), None);
        assert_eq!(Category::from_code("other"), None);
    }

    #[test]
    fn test_from_dir_name_ignores_case() {
        assert_eq!(Category::from_dir_name("Signboard"), Some(Category::Signboard));
        assert_eq!(Category::from_dir_name("logo"), Some(Category::Logo));
        assert_eq!(Category::from_dir_name("Drafts"), None);
    }
}
