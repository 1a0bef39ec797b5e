//! Keeps the address bar in step with the active tab.

use crate::address_bar::AddressBar;
use crate::tab::TabId;
use tracing::debug;

/// Which tab the address bar mirrors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Unbound,
    Bound(TabId),
}

/// Mirrors one tab's navigation state into the address bar.
///
/// Only notifications from the bound tab reach the bar. A background tab
/// finishing its load must never overwrite what the user is looking at.
#[derive(Debug, Default)]
pub struct AddressBarSync {
    state: SyncState,
}

impl AddressBarSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_bound_to(&self, tab: TabId) -> bool {
        self.state == SyncState::Bound(tab)
    }

    /// Follow `tab` and show its current URL right away.
    pub fn bind(&mut self, tab: TabId, current_url: &str, bar: &mut AddressBar) {
        self.state = SyncState::Bound(tab);
        bar.set_text(current_url);
    }

    pub fn unbind(&mut self) {
        self.state = SyncState::Unbound;
    }

    /// Clear the bar while the bound tab navigates. Returns whether the
    /// notification was applied.
    pub fn on_load_started(&self, tab: TabId, bar: &mut AddressBar) -> bool {
        if !self.is_bound_to(tab) {
            debug!(%tab, "ignoring load start from background tab");
            return false;
        }
        bar.clear();
        true
    }

    /// Show the URL the bound tab ended up on. Returns whether the
    /// notification was applied.
    pub fn on_load_finished(&self, tab: TabId, url: &str, bar: &mut AddressBar) -> bool {
        if !self.is_bound_to(tab) {
            debug!(%tab, "ignoring load finish from background tab");
            return false;
        }
        bar.set_text(url);
        true
    }
}
