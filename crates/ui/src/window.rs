//! Browser window.

use crate::address_bar::{AddressBarAction, Key};
use crate::config::ShellConfig;
use crate::controller::{CloseOutcome, TabController};
use crate::navigation::{NavCommand, Toolbar, ToolbarCommand};
use crate::shortcuts::KeyboardShortcut;
use crate::surface::SurfaceFactory;
use crate::tab::TabId;
use crate::theme::{Themed, UiTheme};
use common::{IdCounter, ShellError, ShellResult, WindowId};
use tracing::{debug, info, warn};

/// Input the window reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindowCommand {
    /// Toolbar button pressed.
    Toolbar(ToolbarCommand),
    /// Keyboard shortcut pressed.
    Shortcut(KeyboardShortcut),
    /// Tab label clicked.
    ActivateTab(TabId),
    /// Close button on a tab label clicked.
    CloseTab(TabId),
    /// Key typed into the address bar.
    AddressKey(Key),
    /// Address bar submitted with this text.
    SubmitAddress(String),
}

/// Whether the window survived a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowStatus {
    Open,
    Closed,
}

/// Browser window.
pub struct BrowserWindow {
    /// Window ID.
    id: WindowId,
    /// Application name for the title.
    app_name: String,
    /// Tabs, tab bar and address bar.
    controller: TabController,
    /// Navigation toolbar.
    toolbar: Toolbar,
    /// Theme last applied.
    theme: UiTheme,
    /// Cleared once the window shut down.
    open: bool,
}

impl BrowserWindow {
    /// Create a new browser window with one tab on the start page.
    pub fn new(
        id: WindowId,
        config: &ShellConfig,
        factory: Box<dyn SurfaceFactory>,
        theme: &UiTheme,
        tab_ids: IdCounter,
    ) -> Self {
        let mut window = Self {
            id,
            app_name: config.app_name.clone(),
            controller: TabController::new(config, factory, tab_ids),
            toolbar: Toolbar::new(),
            theme: theme.clone(),
            open: true,
        };

        window.apply_theme(theme);
        window.controller.new_tab();
        info!(window = %id, "window opened");
        window
    }

    /// Get the window ID.
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Window title: the active page's title, then the application name.
    pub fn title(&self) -> String {
        match self.controller.active_tab() {
            Some(tab) if !tab.title.is_empty() => format!("{} - {}", tab.title, self.app_name),
            _ => self.app_name.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn controller(&self) -> &TabController {
        &self.controller
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    /// Restyle all chrome at once.
    pub fn apply_theme(&mut self, theme: &UiTheme) {
        self.controller.tab_bar_mut().apply_theme(theme);
        self.toolbar.apply_theme(theme);
        self.controller.address_bar_mut().apply_theme(theme);
        self.theme = theme.clone();
    }

    /// Apply pending surface notifications.
    pub fn pump_events(&mut self) -> usize {
        if !self.open {
            return 0;
        }
        let handled = self.controller.pump_events();
        self.toolbar.set_loading(self.controller.is_loading());
        handled
    }

    /// Handle one chrome command.
    pub fn dispatch(&mut self, command: WindowCommand) -> WindowStatus {
        if !self.open {
            warn!(window = %self.id, ?command, "command for closed window");
            return WindowStatus::Closed;
        }

        let result = match command {
            WindowCommand::Toolbar(button) => self.on_toolbar(button),
            WindowCommand::Shortcut(shortcut) => self.on_shortcut(shortcut),
            WindowCommand::ActivateTab(id) => self.controller.activate(id).map(|_| None),
            WindowCommand::CloseTab(id) => self.controller.close_tab(id).map(Some),
            WindowCommand::AddressKey(key) => self.on_address_key(key),
            WindowCommand::SubmitAddress(text) => {
                self.controller.address_bar_mut().set_text(&text);
                self.controller.submit_address_bar().map(|_| None)
            }
        };

        match result {
            Ok(Some(CloseOutcome::Shutdown)) => {
                self.close();
                WindowStatus::Closed
            }
            Ok(_) => WindowStatus::Open,
            Err(ShellError::NoActiveTab) => {
                debug!(window = %self.id, "no active tab, command ignored");
                WindowStatus::Open
            }
            Err(err) => {
                warn!(window = %self.id, error = %err, "command failed");
                WindowStatus::Open
            }
        }
    }

    fn on_toolbar(&mut self, button: ToolbarCommand) -> ShellResult<Option<CloseOutcome>> {
        if let Some(command) = button.nav_command() {
            return self.controller.dispatch_nav_command(command).map(|_| None);
        }
        match button {
            ToolbarCommand::NewTab => {
                self.controller.new_tab();
                Ok(None)
            }
            ToolbarCommand::CloseTab => self.controller.close_active_tab().map(Some),
            _ => Ok(None),
        }
    }

    fn on_shortcut(&mut self, shortcut: KeyboardShortcut) -> ShellResult<Option<CloseOutcome>> {
        match shortcut {
            KeyboardShortcut::NewTab => self.on_toolbar(ToolbarCommand::NewTab),
            KeyboardShortcut::CloseTab => self.on_toolbar(ToolbarCommand::CloseTab),
            KeyboardShortcut::FocusAddressBar => {
                self.controller.address_bar_mut().focus();
                Ok(None)
            }
            KeyboardShortcut::NextTab => self.controller.next_tab().map(|_| None),
            KeyboardShortcut::PreviousTab => self.controller.previous_tab().map(|_| None),
            KeyboardShortcut::Reload => self.nav(NavCommand::Reload),
            KeyboardShortcut::Back => self.nav(NavCommand::Back),
            KeyboardShortcut::Forward => self.nav(NavCommand::Forward),
        }
    }

    fn on_address_key(&mut self, key: Key) -> ShellResult<Option<CloseOutcome>> {
        match self.controller.address_bar_mut().on_key(key) {
            Some(AddressBarAction::Submit(_)) => self.controller.submit_address_bar().map(|_| None),
            Some(AddressBarAction::Cancel) => {
                // Put the active tab's URL back.
                if let Some(tab) = self.controller.active_tab() {
                    self.controller.address_bar_mut().set_text(&tab.current_url);
                }
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn nav(&mut self, command: NavCommand) -> ShellResult<Option<CloseOutcome>> {
        self.controller.dispatch_nav_command(command).map(|_| None)
    }

    /// Tear the window down, releasing every tab.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.controller.shutdown();
        self.open = false;
        info!(window = %self.id, "window closed");
    }
}
