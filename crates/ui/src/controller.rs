//! Tab controller.
//!
//! Mediates between chrome events and the tab registry. The controller is
//! the only place that changes which tab is active, and it routes every
//! surface notification by the [`TabId`] it was tagged with:
//!
//! - title changes retitle the emitting tab's label, active or not;
//! - load notifications reach the address bar only through
//!   [`AddressBarSync`], which drops anything not from the active tab;
//! - notifications from tabs that are already closed are discarded.

use crate::address_bar::AddressBar;
use crate::address_sync::AddressBarSync;
use crate::config::ShellConfig;
use crate::navigation::{resolve_input, NavCommand};
use crate::registry::TabRegistry;
use crate::surface::{SurfaceEvent, SurfaceEventKind, SurfaceEventQueue, SurfaceFactory};
use crate::tab::{TabEntryView, TabId, LOADING_TITLE, NEW_TAB_TITLE};
use crate::tab_bar::TabBar;
use common::{IdCounter, ShellError, ShellResult};
use tracing::{debug, info, warn};

/// What closing a tab did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab is gone and another one is active.
    Closed,
    /// It was the last tab; the window must shut down instead.
    Shutdown,
}

/// Tab lifecycle manager for one window.
pub struct TabController {
    registry: TabRegistry,
    tab_bar: TabBar,
    address_bar: AddressBar,
    sync: AddressBarSync,
    events: SurfaceEventQueue,
    active: Option<TabId>,
    home_page: String,
    search_template: String,
}

impl TabController {
    /// Create a controller with no tabs yet. Tab IDs come from `tab_ids`.
    pub fn new(
        config: &ShellConfig,
        factory: Box<dyn SurfaceFactory>,
        tab_ids: IdCounter,
    ) -> Self {
        let events = SurfaceEventQueue::new();
        let registry =
            TabRegistry::new(factory, events.sender(), config.home_page.clone(), tab_ids);
        Self {
            registry,
            tab_bar: TabBar::new(),
            address_bar: AddressBar::new(config.address_placeholder.clone()),
            sync: AddressBarSync::new(),
            events,
            active: None,
            home_page: config.home_page.clone(),
            search_template: config.search_template.clone(),
        }
    }

    /// Open a tab on the start page and make it active.
    pub fn new_tab(&mut self) -> TabId {
        let title = if self.registry.is_empty() {
            LOADING_TITLE
        } else {
            NEW_TAB_TITLE
        };

        let id = self.registry.create(title);
        let index = self.tab_bar.add_tab_label(id, title);
        info!(tab = %id, index, "opened tab");

        self.set_active(id);
        id
    }

    /// Close a tab.
    ///
    /// Closing the active tab activates the tab displayed just before it,
    /// or the first remaining one. Closing the last tab leaves everything
    /// in place and reports [`CloseOutcome::Shutdown`].
    pub fn close_tab(&mut self, id: TabId) -> ShellResult<CloseOutcome> {
        if !self.registry.contains(id) {
            warn!(tab = %id, "close requested for unknown tab");
            return Err(ShellError::TabNotFound(id));
        }

        if self.registry.count() <= 1 {
            info!(tab = %id, "last tab closed, shutting down");
            return Ok(CloseOutcome::Shutdown);
        }

        let position = self.tab_bar.position(id);
        let was_active = self.active == Some(id);

        self.tab_bar.remove_tab_label(id);
        self.registry.remove(id)?;
        info!(tab = %id, remaining = self.registry.count(), "closed tab");

        if was_active {
            self.sync.unbind();
            self.active = None;

            let successor = position
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| self.tab_bar.id_at(index))
                .or_else(|| self.tab_bar.first());

            match successor {
                Some(next) => self.set_active(next),
                None => debug_assert!(false, "tab bar empty while tabs remain"),
            }
        }

        Ok(CloseOutcome::Closed)
    }

    /// Close whichever tab is active.
    pub fn close_active_tab(&mut self) -> ShellResult<CloseOutcome> {
        let id = self.active.ok_or(ShellError::NoActiveTab)?;
        self.close_tab(id)
    }

    /// Make `id` the active tab.
    pub fn activate(&mut self, id: TabId) -> ShellResult<()> {
        if !self.registry.contains(id) {
            warn!(tab = %id, "activate requested for unknown tab");
            return Err(ShellError::TabNotFound(id));
        }
        self.set_active(id);
        Ok(())
    }

    /// Activate the tab displayed after the active one.
    pub fn next_tab(&mut self) -> ShellResult<()> {
        let active = self.active.ok_or(ShellError::NoActiveTab)?;
        match self.tab_bar.next_after(active) {
            Some(next) => self.activate(next),
            None => Ok(()),
        }
    }

    /// Activate the tab displayed before the active one.
    pub fn previous_tab(&mut self) -> ShellResult<()> {
        let active = self.active.ok_or(ShellError::NoActiveTab)?;
        match self.tab_bar.previous_before(active) {
            Some(previous) => self.activate(previous),
            None => Ok(()),
        }
    }

    fn set_active(&mut self, id: TabId) {
        let current_url = self.registry.current_url(id).unwrap_or_default();
        self.active = Some(id);
        self.tab_bar.set_active_display(id);
        self.sync.bind(id, &current_url, &mut self.address_bar);
        debug!(tab = %id, "activated tab");
    }

    /// Forward a navigation command to the active tab.
    pub fn dispatch_nav_command(&mut self, command: NavCommand) -> ShellResult<()> {
        let id = self.active.ok_or(ShellError::NoActiveTab)?;

        let Some(surface) = self.registry.surface_mut(id) else {
            debug_assert!(false, "active tab {} has no entry", id);
            warn!(tab = %id, "active tab missing from registry");
            return Err(ShellError::TabNotFound(id));
        };

        debug!(tab = %id, ?command, "dispatching navigation");
        match command {
            NavCommand::Back => surface.back(),
            NavCommand::Forward => surface.forward(),
            NavCommand::Reload => surface.reload(),
            NavCommand::Home => surface.navigate(&self.home_page),
        }
        Ok(())
    }

    /// Load address-bar style input in the active tab.
    ///
    /// Returns the URL that was loaded, or `None` for blank input.
    pub fn navigate_to_input(&mut self, text: &str) -> ShellResult<Option<String>> {
        let id = self.active.ok_or(ShellError::NoActiveTab)?;
        let Some(url) = resolve_input(text, &self.search_template) else {
            return Ok(None);
        };

        let surface = self.registry.surface_mut(id).ok_or(ShellError::TabNotFound(id))?;
        info!(tab = %id, %url, "navigating");
        surface.navigate(&url);
        Ok(Some(url))
    }

    /// Submit whatever the address bar holds.
    pub fn submit_address_bar(&mut self) -> ShellResult<Option<String>> {
        let text = self.address_bar.text().to_string();
        self.address_bar.blur();
        self.navigate_to_input(&text)
    }

    /// Apply every pending surface notification. Returns how many were
    /// taken off the queue.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.events.try_next() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Route one notification to the tab it came from.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        let SurfaceEvent { tab, kind } = event;
        if !self.registry.contains(tab) {
            debug!(%tab, ?kind, "discarding notification from closed tab");
            return;
        }

        match kind {
            SurfaceEventKind::TitleChanged(title) => {
                if let Err(err) = self.registry.set_title(tab, &title) {
                    debug_assert!(false, "title for unregistered tab {}", tab);
                    warn!(%tab, error = %err, "title change lost");
                }
                self.tab_bar.set_tab_title(tab, title);
            }
            SurfaceEventKind::LoadStarted => {
                self.tab_bar.set_tab_loading(tab, true);
                self.sync.on_load_started(tab, &mut self.address_bar);
            }
            SurfaceEventKind::LoadFinished { success } => {
                let url = self.registry.current_url(tab).unwrap_or_default();
                if let Err(err) = self.registry.set_displayed_url(tab, &url) {
                    debug_assert!(false, "load finished for unregistered tab {}", tab);
                    warn!(%tab, error = %err, "displayed URL not recorded");
                }
                self.tab_bar.set_tab_loading(tab, false);
                if !success {
                    debug!(%tab, %url, "load failed");
                }
                self.sync.on_load_finished(tab, &url, &mut self.address_bar);
            }
        }
    }

    /// Release every tab. The controller is unusable afterwards.
    pub fn shutdown(&mut self) {
        self.sync.unbind();
        self.active = None;
        for id in self.registry.ids().collect::<Vec<_>>() {
            self.tab_bar.remove_tab_label(id);
        }
        self.registry.clear();
        // Anything still queued belongs to released surfaces.
        let dropped = self.events.drain().len();
        info!(dropped, "tabs released");
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_tab(&self) -> Option<TabEntryView> {
        self.active.and_then(|id| self.registry.get(id))
    }

    pub fn tab(&self, id: TabId) -> Option<TabEntryView> {
        self.registry.get(id)
    }

    pub fn tab_count(&self) -> usize {
        self.registry.count()
    }

    pub fn is_loading(&self) -> bool {
        self.active
            .and_then(|id| self.tab_bar.tabs().iter().find(|t| t.id == id))
            .is_some_and(|label| label.loading)
    }

    pub fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    pub fn tab_bar_mut(&mut self) -> &mut TabBar {
        &mut self.tab_bar
    }

    pub fn address_bar(&self) -> &AddressBar {
        &self.address_bar
    }

    pub fn address_bar_mut(&mut self) -> &mut AddressBar {
        &mut self.address_bar
    }
}
