//! Tab registry.
//!
//! The registry is the single owner of every tab's surface. It knows which
//! tabs exist and nothing about how they are displayed: ordering belongs
//! to the tab bar.

use crate::surface::{SurfaceEvent, SurfaceEvents, SurfaceFactory, WebSurface};
use crate::tab::{TabEntry, TabEntryView, TabId};
use common::{IdCounter, ShellError, ShellResult};
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Owns all live tabs of one window.
pub struct TabRegistry {
    /// Live entries.
    entries: HashMap<TabId, TabEntry>,
    /// Tab ID source, shared by every window. Never rewinds.
    ids: IdCounter,
    /// Allocates surfaces.
    factory: Box<dyn SurfaceFactory>,
    /// Notification channel handed to new surfaces.
    events: UnboundedSender<SurfaceEvent>,
    /// Page every new surface starts on.
    start_page: String,
}

impl TabRegistry {
    /// Create an empty registry that mints tab IDs from `ids`.
    pub fn new(
        factory: Box<dyn SurfaceFactory>,
        events: UnboundedSender<SurfaceEvent>,
        start_page: impl Into<String>,
        ids: IdCounter,
    ) -> Self {
        Self {
            entries: HashMap::new(),
            ids,
            factory,
            events,
            start_page: start_page.into(),
        }
    }

    /// Allocate a surface, register it under a fresh ID and start loading
    /// the start page.
    pub fn create(&mut self, title: &str) -> TabId {
        let id = TabId(self.ids.next());
        let handle = SurfaceEvents::new(id, self.events.clone());

        let mut surface = self.factory.create_surface(handle);
        surface.navigate(&self.start_page);

        self.entries.insert(id, TabEntry::new(id, surface, title));
        debug!(tab = %id, count = self.entries.len(), "registered tab");
        id
    }

    /// Release a tab's surface and forget the tab.
    pub fn remove(&mut self, id: TabId) -> ShellResult<()> {
        match self.entries.remove(&id) {
            Some(entry) => {
                entry.release();
                debug!(tab = %id, count = self.entries.len(), "released tab");
                Ok(())
            }
            None => {
                warn!(tab = %id, "remove of unknown tab");
                Err(ShellError::TabNotFound(id))
            }
        }
    }

    /// Release every tab. Only used when the window closes.
    pub fn clear(&mut self) {
        for (_, entry) in self.entries.drain() {
            entry.release();
        }
    }

    pub fn get(&self, id: TabId) -> Option<TabEntryView> {
        self.entries.get(&id).map(TabEntry::view)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Live IDs in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = TabId> + '_ {
        self.entries.keys().copied()
    }

    /// Surface of a tab, for command dispatch.
    pub fn surface_mut(&mut self, id: TabId) -> Option<&mut dyn WebSurface> {
        self.entries.get_mut(&id).map(TabEntry::surface_mut)
    }

    pub fn current_url(&self, id: TabId) -> Option<String> {
        self.entries.get(&id).map(TabEntry::current_url)
    }

    pub fn set_title(&mut self, id: TabId, title: &str) -> ShellResult<()> {
        let entry = self.entries.get_mut(&id).ok_or(ShellError::TabNotFound(id))?;
        entry.set_title(title);
        Ok(())
    }

    pub fn set_displayed_url(&mut self, id: TabId, url: &str) -> ShellResult<()> {
        let entry = self.entries.get_mut(&id).ok_or(ShellError::TabNotFound(id))?;
        entry.set_displayed_url(url);
        Ok(())
    }
}
