//! Navigation toolbar and address input resolution.

use crate::theme::{Themed, UiTheme, WidgetStyle};

/// Placeholder the search template substitutes the query into.
pub const QUERY_PLACEHOLDER: &str = "%s";

/// Turn address-bar input into the URL to load.
///
/// Input starting with `http://` or `https://` is loaded as is. Anything
/// else is percent-encoded and substituted into `search_template`.
/// Surrounding whitespace is ignored; blank input resolves to nothing.
pub fn resolve_input(input: &str, search_template: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        Some(input.to_string())
    } else {
        let query = urlencoding::encode(input);
        Some(search_template.replace(QUERY_PLACEHOLDER, &query))
    }
}

/// Commands forwarded to the active tab's surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Back,
    Forward,
    Reload,
    Home,
}

/// Toolbar buttons, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarCommand {
    Back,
    Forward,
    Reload,
    Home,
    NewTab,
    CloseTab,
}

impl ToolbarCommand {
    pub const ALL: [ToolbarCommand; 6] = [
        ToolbarCommand::Back,
        ToolbarCommand::Forward,
        ToolbarCommand::Reload,
        ToolbarCommand::Home,
        ToolbarCommand::NewTab,
        ToolbarCommand::CloseTab,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            ToolbarCommand::Back => "Back",
            ToolbarCommand::Forward => "Forward",
            ToolbarCommand::Reload => "Refresh",
            ToolbarCommand::Home => "Home",
            ToolbarCommand::NewTab => "Add Tab",
            ToolbarCommand::CloseTab => "Remove Current Tab",
        }
    }

    /// The surface command behind this button, if it is one.
    pub fn nav_command(self) -> Option<NavCommand> {
        match self {
            ToolbarCommand::Back => Some(NavCommand::Back),
            ToolbarCommand::Forward => Some(NavCommand::Forward),
            ToolbarCommand::Reload => Some(NavCommand::Reload),
            ToolbarCommand::Home => Some(NavCommand::Home),
            ToolbarCommand::NewTab | ToolbarCommand::CloseTab => None,
        }
    }
}

/// Navigation toolbar.
pub struct Toolbar {
    /// Is the active tab loading.
    loading: bool,
    /// Current colors.
    style: WidgetStyle,
}

impl Toolbar {
    /// Create a new toolbar.
    pub fn new() -> Self {
        Self {
            loading: false,
            style: UiTheme::default().toolbar_style(),
        }
    }

    /// Buttons in display order.
    pub fn buttons(&self) -> &'static [ToolbarCommand] {
        &ToolbarCommand::ALL
    }

    /// Set loading state.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Check if loading.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Themed for Toolbar {
    fn apply_theme(&mut self, theme: &UiTheme) {
        self.style = theme.toolbar_style();
    }

    fn style(&self) -> &WidgetStyle {
        &self.style
    }
}
