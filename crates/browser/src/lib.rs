//! CrypBrowser - a tabbed browser shell.
//!
//! This crate wires the UI shell to a web engine:
//! - Headless engine for running without a display
//! - Line-driven shell that drives a window from text commands

pub mod headless;
pub mod shell;

pub use headless::{HeadlessEngine, HeadlessPage};
pub use shell::{parse_line, Shell, ShellFlow, ShellInput};

/// Browser version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
