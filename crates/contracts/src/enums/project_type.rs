use serde::{Deserialize, Serialize};

use super::Category;

/// Project kind picked in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    Design(Category),
    Other,
}

impl ProjectType {
    /// Value posted in the `project` form field
    pub fn code(&self) -> &'static str {
        match self {
            ProjectType::Design(category) => category.code(),
            ProjectType::Other => "other",
        }
    }

    pub fn label(&self) -> String {
        match self {
            ProjectType::Design(category) => format!("{} Design", category.display_name()),
            ProjectType::Other => "Other".to_string(),
        }
    }

    /// Options offered by the form select
    pub fn options() -> [ProjectType; 6] {
        [
            ProjectType::Design(Category::Poster),
            ProjectType::Design(Category::Menu),
            ProjectType::Design(Category::Signboard),
            ProjectType::Design(Category::Logo),
            ProjectType::Design(Category::Website),
            ProjectType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::options().into_iter().find(|p| p.code() == code)
    }
}

impl Default for ProjectType {
    fn default() -> Self {
        ProjectType::Design(Category::Poster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_labels() {
        assert_eq!(ProjectType::Design(Category::Menu).code(), "menu");
        assert_eq!(ProjectType::Design(Category::Menu).label(), "Menu Design");
        assert_eq!(ProjectType::Other.code(), "other");
        assert_eq!(ProjectType::from_code("website"), Some(ProjectType::Design(Category::Website)));
    }

    #[test]
    fn test_shooting_is_not_a_form_option() {
        assert_eq!(ProjectType::from_code("shooting"), None);
    }
}
