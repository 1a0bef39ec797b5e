//! Common error types.

use crate::ids::TabId;
use thiserror::Error;

/// Error type for the browser shell.
#[derive(Error, Debug)]
pub enum ShellError {
    /// An operation referenced a tab that is no longer registered.
    #[error("Tab not found: {0}")]
    TabNotFound(TabId),

    /// A tab-scoped command arrived while no tab was active.
    #[error("No active tab")]
    NoActiveTab,

    #[error("Invalid shortcut: {0}")]
    InvalidShortcut(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type ShellResult<T> = Result<T, ShellError>;

impl ShellError {
    pub fn shortcut(msg: impl Into<String>) -> Self {
        Self::InvalidShortcut(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ShellError::TabNotFound(TabId(7)).to_string(), "Tab not found: tab-7");
        assert_eq!(ShellError::config("bad").to_string(), "Invalid configuration: bad");
    }

    #[test]
    fn test_url_error_converts() {
        fn parse(s: &str) -> ShellResult<url::Url> {
            Ok(url::Url::parse(s)?)
        }
        assert!(matches!(parse("not a url"), Err(ShellError::UrlParse(_))));
    }
}
