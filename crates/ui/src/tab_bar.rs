//! Tab bar component.
//!
//! The tab bar owns display order. Tabs keep their stable [`TabId`] no
//! matter where they sit, so removing a label never changes which tab
//! another label refers to.

use crate::tab::TabId;
use crate::theme::{Themed, UiTheme, WidgetStyle};

/// Tab bar.
pub struct TabBar {
    /// Labels in display order.
    tabs: Vec<TabLabel>,
    /// Tab displayed as selected.
    active: Option<TabId>,
    /// Current colors.
    style: WidgetStyle,
}

impl TabBar {
    /// Create a new tab bar.
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            style: UiTheme::default().tab_strip_style(),
        }
    }

    /// Append a label and return its display index.
    pub fn add_tab_label(&mut self, id: TabId, title: impl Into<String>) -> usize {
        self.tabs.push(TabLabel {
            id,
            title: title.into(),
            loading: false,
        });
        self.tabs.len() - 1
    }

    /// Remove a label.
    pub fn remove_tab_label(&mut self, id: TabId) {
        self.tabs.retain(|t| t.id != id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// Mark a tab as the selected one.
    pub fn set_active_display(&mut self, id: TabId) {
        self.active = Some(id);
    }

    /// Get the tab displayed as selected.
    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    /// Set tab title.
    pub fn set_tab_title(&mut self, id: TabId, title: impl Into<String>) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.title = title.into();
        }
    }

    /// Set tab loading state.
    pub fn set_tab_loading(&mut self, id: TabId, loading: bool) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.loading = loading;
        }
    }

    /// Get labels in display order.
    pub fn tabs(&self) -> &[TabLabel] {
        &self.tabs
    }

    /// Get tab count.
    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    /// Display index of a tab.
    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Tab at a display index.
    pub fn id_at(&self, index: usize) -> Option<TabId> {
        self.tabs.get(index).map(|t| t.id)
    }

    pub fn first(&self) -> Option<TabId> {
        self.id_at(0)
    }

    /// Tab after `id`, wrapping around.
    pub fn next_after(&self, id: TabId) -> Option<TabId> {
        let index = self.position(id)?;
        self.id_at((index + 1) % self.tabs.len())
    }

    /// Tab before `id`, wrapping around.
    pub fn previous_before(&self, id: TabId) -> Option<TabId> {
        let index = self.position(id)?;
        let previous = if index == 0 { self.tabs.len() - 1 } else { index - 1 };
        self.id_at(previous)
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Themed for TabBar {
    fn apply_theme(&mut self, theme: &UiTheme) {
        self.style = theme.tab_strip_style();
    }

    fn style(&self) -> &WidgetStyle {
        &self.style
    }
}

/// Tab label in the tab bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabLabel {
    /// Tab ID.
    pub id: TabId,
    /// Title.
    pub title: String,
    /// Is loading.
    pub loading: bool,
}
