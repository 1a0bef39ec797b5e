//! Shell configuration.

use crate::navigation::QUERY_PLACEHOLDER;
use crate::theme::ThemeMode;
use common::{ShellError, ShellResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Shell configuration, passed to every window at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Application name, shown in window titles.
    pub app_name: String,
    /// Start page for new tabs and the Home button.
    pub home_page: String,
    /// Search URL template; `%s` is replaced by the encoded query.
    pub search_template: String,
    /// Address bar hint.
    pub address_placeholder: String,
    /// Initial theme.
    pub theme: ThemeMode,
}

impl ShellConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start page.
    pub fn with_home_page(mut self, home_page: &str) -> Self {
        self.home_page = home_page.to_string();
        self
    }

    /// Set the search template.
    pub fn with_search_template(mut self, template: &str) -> Self {
        self.search_template = template.to_string();
        self
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Check that the start page and search template are usable.
    pub fn validate(&self) -> ShellResult<()> {
        Url::parse(&self.home_page)?;

        if !self.search_template.contains(QUERY_PLACEHOLDER) {
            return Err(ShellError::config(format!(
                "search template {:?} has no {} placeholder",
                self.search_template, QUERY_PLACEHOLDER
            )));
        }
        Url::parse(&self.search_template.replace(QUERY_PLACEHOLDER, "q"))?;

        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "CrypBrowser".to_string(),
            home_page: "https://duckduckgo.com/".to_string(),
            search_template: "https://duckduckgo.com/?q=%s".to_string(),
            address_placeholder: "Enter search query or URL".to_string(),
            theme: ThemeMode::Light,
        }
    }
}
