//! Browser tab.

use crate::surface::WebSurface;

pub use common::TabId;

/// Title shown for a tab before its page reports one.
pub const LOADING_TITLE: &str = "Loading...";

/// Title for tabs opened after the initial one.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// A registered tab and the surface it owns.
pub struct TabEntry {
    /// Tab ID.
    id: TabId,
    /// Rendering surface. Released together with the entry.
    surface: Box<dyn WebSurface>,
    /// Last title reported by the surface.
    title: String,
    /// URL last mirrored for this tab on load completion.
    displayed_url: String,
}

impl TabEntry {
    /// Wrap a freshly created surface.
    pub fn new(id: TabId, surface: Box<dyn WebSurface>, title: impl Into<String>) -> Self {
        Self {
            id,
            surface,
            title: title.into(),
            displayed_url: String::new(),
        }
    }

    /// Set the page title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_displayed_url(&mut self, url: impl Into<String>) {
        self.displayed_url = url.into();
    }

    /// URL the surface currently reports.
    pub fn current_url(&self) -> String {
        self.surface.current_url()
    }

    pub fn surface_mut(&mut self) -> &mut dyn WebSurface {
        self.surface.as_mut()
    }

    /// Snapshot for read-only consumers.
    pub fn view(&self) -> TabEntryView {
        TabEntryView {
            id: self.id,
            title: self.title.clone(),
            displayed_url: self.displayed_url.clone(),
            current_url: self.current_url(),
        }
    }

    /// Tear the surface down and drop the entry.
    pub(crate) fn release(mut self) {
        self.surface.close();
    }
}

impl std::fmt::Debug for TabEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabEntry")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("displayed_url", &self.displayed_url)
            .finish_non_exhaustive()
    }
}

/// Read-only snapshot of a tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabEntryView {
    pub id: TabId,
    pub title: String,
    pub displayed_url: String,
    pub current_url: String,
}
