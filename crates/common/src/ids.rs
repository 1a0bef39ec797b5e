//! Stable identifiers shared by the shell crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tab identifier.
///
/// Minted monotonically by the tab registry and never reused, so a
/// notification carrying a stale id can never be mistaken for a newer tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Window identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Monotonic id source.
///
/// Clones share the same sequence, so every holder of a clone mints from
/// one range and no id is ever handed out twice.
#[derive(Clone, Debug, Default)]
pub struct IdCounter {
    next: Arc<AtomicU64>,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next raw id.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
