use contracts::enums::ProjectType;
use contracts::projections::p900_portfolio_view::DEFAULT_PREVIEW_LIMIT;
use contracts::shared::navigation::{DEFAULT_HEADER_CONDENSE_THRESHOLD, DEFAULT_SCROLL_LOOKAHEAD};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub studio: StudioConfig,
    pub contact_form: ContactFormConfig,
    pub navigation: NavigationConfig,
    pub portfolio: PortfolioConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StudioConfig {
    pub name: String,
    pub email: String,
    pub phone_display: String,
    /// Number in international format for `tel:` links and the clipboard
    pub phone_dial: String,
    pub whatsapp_number: String,
    pub whatsapp_prefill: String,
    pub location: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ContactFormConfig {
    pub endpoint: String,
    pub subject: String,
    pub default_project: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NavigationConfig {
    pub scroll_lookahead: f64,
    pub header_condense_threshold: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PortfolioConfig {
    pub preview_limit: usize,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: "Justudio".to_string(),
            email: String::new(),
            phone_display: String::new(),
            phone_dial: String::new(),
            whatsapp_number: String::new(),
            whatsapp_prefill: String::new(),
            location: String::new(),
        }
    }
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            subject: "New Project Inquiry".to_string(),
            default_project: ProjectType::default().code().to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_lookahead: DEFAULT_SCROLL_LOOKAHEAD,
            header_condense_threshold: DEFAULT_HEADER_CONDENSE_THRESHOLD,
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

impl ContactFormConfig {
    /// Unknown codes fall back to the default project type
    pub fn default_project(&self) -> ProjectType {
        ProjectType::from_code(&self.default_project).unwrap_or_else(|| {
            log::warn!(
                "Unknown default_project '{}' in site config, using '{}'",
                self.default_project,
                ProjectType::default().code()
            );
            ProjectType::default()
        })
    }
}

/// Site configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../site.toml");

/// Parse the embedded `site.toml`
pub fn load_config() -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Embedded config, or built-in defaults if it cannot be parsed
pub fn load_config_or_default() -> SiteConfig {
    match load_config() {
        Ok(config) => {
            log::debug!("Loaded site config for '{}'", config.studio.name);
            config
        }
        Err(e) => {
            log::error!("Failed to parse site config, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Category;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.studio.name, "Justudio");
        assert_eq!(config.contact_form.endpoint, "https://formspree.io/f/xandajav");
        assert_eq!(config.contact_form.default_project(), ProjectType::Design(Category::Poster));
        assert_eq!(config.navigation.scroll_lookahead, 100.0);
        assert_eq!(config.portfolio.preview_limit, 5);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: SiteConfig = toml::from_str("[portfolio]\npreview_limit = 8\n").unwrap();
        assert_eq!(config.portfolio.preview_limit, 8);
        assert_eq!(config.navigation.header_condense_threshold, 50.0);
        assert_eq!(config.contact_form.default_project(), ProjectType::default());
    }

    #[test]
    fn test_unknown_default_project_falls_back() {
        let form = ContactFormConfig {
            default_project: "billboard".to_string(),
            ..ContactFormConfig::default()
        };
        assert_eq!(form.default_project(), ProjectType::default());
    }
}
