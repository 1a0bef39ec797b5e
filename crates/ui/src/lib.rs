//! Browser UI shell.
//!
//! This crate provides the tab and view lifecycle of the browser:
//! - Web surface seam and notification routing
//! - Tab registry and tab controller
//! - Address bar synchronisation with the active tab
//! - Tab bar, toolbar and address bar models
//! - Global light/dark theme
//! - Windows and the application context

pub mod address_bar;
pub mod address_sync;
pub mod browser;
pub mod config;
pub mod controller;
pub mod navigation;
pub mod registry;
pub mod shortcuts;
pub mod surface;
pub mod tab;
pub mod tab_bar;
pub mod theme;
pub mod window;

#[cfg(test)]
mod testing;

pub use browser::Browser;
pub use config::ShellConfig;
pub use controller::{CloseOutcome, TabController};
pub use navigation::{resolve_input, NavCommand, ToolbarCommand};
pub use surface::{SurfaceEvent, SurfaceEventKind, SurfaceEventQueue, SurfaceEvents, SurfaceFactory, WebSurface};
pub use tab::TabId;
pub use theme::{ThemeMode, ThemeState, UiTheme};
pub use window::{BrowserWindow, WindowCommand, WindowStatus};
