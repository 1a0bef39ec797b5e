//! Test doubles for the surface seam.

use crate::surface::{SurfaceEvents, SurfaceFactory, WebSurface};
use common::TabId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Command received by a recording surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recorded {
    Navigate(String),
    Back,
    Forward,
    Reload,
    Closed,
}

#[derive(Default)]
struct Shared {
    commands: HashMap<TabId, Vec<Recorded>>,
    urls: HashMap<TabId, String>,
    handles: HashMap<TabId, SurfaceEvents>,
    live: HashMap<TabId, bool>,
}

/// Factory whose surfaces record commands instead of loading anything.
///
/// Clones share state, so a test keeps one clone to inspect commands and
/// to emit notifications on behalf of a tab.
#[derive(Clone, Default)]
pub struct RecordingFactory {
    shared: Rc<RefCell<Shared>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self, tab: TabId) -> Vec<Recorded> {
        self.shared.borrow().commands.get(&tab).cloned().unwrap_or_default()
    }

    pub fn is_live(&self, tab: TabId) -> bool {
        self.shared.borrow().live.get(&tab).copied().unwrap_or(false)
    }

    pub fn created(&self) -> usize {
        self.shared.borrow().live.len()
    }

    /// Notification handle for `tab`, usable after the tab is gone.
    pub fn events(&self, tab: TabId) -> SurfaceEvents {
        self.shared.borrow().handles[&tab].clone()
    }

    /// Pretend the engine committed a navigation to `url`.
    pub fn set_url(&self, tab: TabId, url: &str) {
        self.shared.borrow_mut().urls.insert(tab, url.to_string());
    }
}

impl SurfaceFactory for RecordingFactory {
    fn create_surface(&mut self, events: SurfaceEvents) -> Box<dyn WebSurface> {
        let tab = events.tab();
        {
            let mut shared = self.shared.borrow_mut();
            shared.handles.insert(tab, events);
            shared.live.insert(tab, true);
        }
        Box::new(RecordingSurface {
            tab,
            shared: Rc::clone(&self.shared),
        })
    }
}

struct RecordingSurface {
    tab: TabId,
    shared: Rc<RefCell<Shared>>,
}

impl RecordingSurface {
    fn record(&self, command: Recorded) {
        self.shared
            .borrow_mut()
            .commands
            .entry(self.tab)
            .or_default()
            .push(command);
    }
}

impl WebSurface for RecordingSurface {
    fn navigate(&mut self, url: &str) {
        self.shared.borrow_mut().urls.insert(self.tab, url.to_string());
        self.record(Recorded::Navigate(url.to_string()));
    }

    fn back(&mut self) {
        self.record(Recorded::Back);
    }

    fn forward(&mut self) {
        self.record(Recorded::Forward);
    }

    fn reload(&mut self) {
        self.record(Recorded::Reload);
    }

    fn current_url(&self) -> String {
        self.shared.borrow().urls.get(&self.tab).cloned().unwrap_or_default()
    }

    fn close(&mut self) {
        self.record(Recorded::Closed);
    }
}

impl Drop for RecordingSurface {
    fn drop(&mut self) {
        self.shared.borrow_mut().live.insert(self.tab, false);
    }
}
