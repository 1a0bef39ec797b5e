//! Application context.
//!
//! [`Browser`] replaces process-wide singletons: it owns the windows, the
//! shared theme and the configuration, and is passed around explicitly.
//! Several independent instances can coexist, which is what tests do.

use crate::config::ShellConfig;
use crate::surface::SurfaceFactory;
use crate::theme::{ThemeMode, ThemeState, UiTheme};
use crate::window::{BrowserWindow, WindowCommand, WindowStatus};
use common::{IdCounter, ShellResult, WindowId};
use std::collections::BTreeMap;
use tracing::info;

/// Browser application.
pub struct Browser {
    /// Shell configuration.
    config: ShellConfig,
    /// Process-wide theme.
    theme: ThemeState,
    /// Open windows.
    windows: BTreeMap<WindowId, BrowserWindow>,
    /// Window ID source.
    window_ids: IdCounter,
    /// Tab ID source shared by all windows.
    tab_ids: IdCounter,
    /// Whether the browser is running.
    running: bool,
}

impl Browser {
    /// Create a browser with no windows.
    pub fn new(config: ShellConfig) -> ShellResult<Self> {
        config.validate()?;
        Ok(Self {
            theme: ThemeState::new(config.theme),
            config,
            windows: BTreeMap::new(),
            window_ids: IdCounter::new(),
            tab_ids: IdCounter::new(),
            running: true,
        })
    }

    /// Open a window whose tabs get their surfaces from `factory`.
    pub fn open_window(&mut self, factory: Box<dyn SurfaceFactory>) -> WindowId {
        let id = WindowId(self.window_ids.next());
        let window = BrowserWindow::new(
            id,
            &self.config,
            factory,
            &self.theme.theme(),
            self.tab_ids.clone(),
        );
        self.windows.insert(id, window);
        self.running = true;
        id
    }

    /// Close a window.
    pub fn close_window(&mut self, id: WindowId) {
        if let Some(mut window) = self.windows.remove(&id) {
            window.close();
        }

        // Quit if all windows are closed
        if self.windows.is_empty() {
            info!("last window closed");
            self.running = false;
        }
    }

    /// Send a command to a window, dropping the window if it closed.
    pub fn dispatch(&mut self, id: WindowId, command: WindowCommand) -> WindowStatus {
        let status = match self.windows.get_mut(&id) {
            Some(window) => window.dispatch(command),
            None => WindowStatus::Closed,
        };
        if status == WindowStatus::Closed {
            self.close_window(id);
        }
        status
    }

    /// Pump surface notifications for every window.
    pub fn pump_events(&mut self) -> usize {
        self.windows.values_mut().map(BrowserWindow::pump_events).sum()
    }

    /// Flip the theme and restyle every window.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let theme = self.theme.toggle();
        for window in self.windows.values_mut() {
            window.apply_theme(&theme);
        }
        theme.mode
    }

    pub fn theme(&self) -> UiTheme {
        self.theme.theme()
    }

    /// Get a window.
    pub fn window(&self, id: WindowId) -> Option<&BrowserWindow> {
        self.windows.get(&id)
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Check if the browser is running.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
