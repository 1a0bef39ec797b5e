//! Common types used across the browser shell crates.

pub mod color;
pub mod error;
pub mod ids;

pub use color::Color;
pub use error::{ShellError, ShellResult};
pub use ids::{IdCounter, TabId, WindowId};
