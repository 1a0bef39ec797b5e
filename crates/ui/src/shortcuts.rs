//! Keyboard shortcuts.

use common::{ShellError, ShellResult};
use std::fmt;
use std::str::FromStr;

/// Keyboard shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardShortcut {
    NewTab,
    CloseTab,
    FocusAddressBar,
    NextTab,
    PreviousTab,
    Reload,
    Back,
    Forward,
}

impl KeyboardShortcut {
    pub const ALL: [KeyboardShortcut; 8] = [
        KeyboardShortcut::NewTab,
        KeyboardShortcut::CloseTab,
        KeyboardShortcut::FocusAddressBar,
        KeyboardShortcut::NextTab,
        KeyboardShortcut::PreviousTab,
        KeyboardShortcut::Reload,
        KeyboardShortcut::Back,
        KeyboardShortcut::Forward,
    ];

    /// Default key binding.
    pub fn accelerator(self) -> Accelerator {
        match self {
            KeyboardShortcut::NewTab => Accelerator::ctrl("T"),
            KeyboardShortcut::CloseTab => Accelerator::ctrl("W"),
            KeyboardShortcut::FocusAddressBar => Accelerator::ctrl("L"),
            KeyboardShortcut::NextTab => Accelerator::ctrl("TAB"),
            KeyboardShortcut::PreviousTab => Accelerator {
                shift: true,
                ..Accelerator::ctrl("TAB")
            },
            KeyboardShortcut::Reload => Accelerator::key("F5"),
            KeyboardShortcut::Back => Accelerator::alt("LEFT"),
            KeyboardShortcut::Forward => Accelerator::alt("RIGHT"),
        }
    }

    /// Shortcut bound to `accelerator`, if any.
    pub fn lookup(accelerator: &Accelerator) -> Option<Self> {
        Self::ALL.into_iter().find(|s| &s.accelerator() == accelerator)
    }
}

impl FromStr for KeyboardShortcut {
    type Err = ShellError;

    fn from_str(s: &str) -> ShellResult<Self> {
        let accelerator: Accelerator = s.parse()?;
        Self::lookup(&accelerator)
            .ok_or_else(|| ShellError::shortcut(format!("{} is not bound", accelerator)))
    }
}

/// A key with modifiers, e.g. `Ctrl+Shift+Tab`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accelerator {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Upper-cased key name.
    pub key: String,
}

impl Accelerator {
    fn key(key: &str) -> Self {
        Self {
            ctrl: false,
            shift: false,
            alt: false,
            key: key.to_string(),
        }
    }

    fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::key(key)
        }
    }

    fn alt(key: &str) -> Self {
        Self {
            alt: true,
            ..Self::key(key)
        }
    }
}

impl FromStr for Accelerator {
    type Err = ShellError;

    fn from_str(s: &str) -> ShellResult<Self> {
        let mut accelerator = Accelerator::key("");

        let mut parts = s.split('+').map(str::trim).peekable();
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(ShellError::shortcut(format!("empty key in {:?}", s)));
            }
            if parts.peek().is_none() {
                accelerator.key = part.to_ascii_uppercase();
                break;
            }
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" => accelerator.ctrl = true,
                "shift" => accelerator.shift = true,
                "alt" | "option" => accelerator.alt = true,
                other => {
                    return Err(ShellError::shortcut(format!("unknown modifier {:?}", other)));
                }
            }
        }

        Ok(accelerator)
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        write!(f, "{}", self.key)
    }
}
