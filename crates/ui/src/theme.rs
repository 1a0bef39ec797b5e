//! Theme and colors.
//!
//! The theme is process-wide. [`ThemeState`] holds the current mode and
//! every chrome widget implements [`Themed`], so a toggle restyles the tab
//! strip, toolbar and address bar of each window in one pass.

use common::Color;
use serde::{Deserialize, Serialize};

/// Light or dark chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// UI theme.
#[derive(Clone, Debug, PartialEq)]
pub struct UiTheme {
    pub name: String,
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

/// Theme colors.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub border: Color,
    pub hover: Color,
    pub tab_background: Color,
    pub tab_active_background: Color,
    pub toolbar_background: Color,
    pub address_bar_background: Color,
}

impl UiTheme {
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            mode: ThemeMode::Light,
            colors: ThemeColors {
                background: Color::rgb(255, 255, 255),
                foreground: Color::rgb(33, 33, 33),
                accent: Color::rgb(66, 133, 244),
                border: Color::BLACK,
                hover: Color::rgb(241, 243, 244).adjust_lightness(-0.05),
                tab_background: Color::rgb(241, 243, 244),
                tab_active_background: Color::rgb(255, 255, 255),
                toolbar_background: Color::rgb(241, 243, 244),
                address_bar_background: Color::rgb(255, 255, 255),
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            mode: ThemeMode::Dark,
            colors: ThemeColors {
                background: Color::from_rgb_u32(0x07090D),
                foreground: Color::WHITE,
                accent: Color::from_rgb_u32(0x2F3640),
                border: Color::from_rgb_u32(0x0E121B),
                hover: Color::from_rgb_u32(0x2F3640),
                tab_background: Color::from_rgb_u32(0x07090D),
                tab_active_background: Color::from_rgb_u32(0x0E121B),
                toolbar_background: Color::from_rgb_u32(0x0E121B),
                address_bar_background: Color::from_rgb_u32(0x1C2435),
            },
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn tab_strip_style(&self) -> WidgetStyle {
        WidgetStyle {
            background: self.colors.tab_background,
            foreground: self.colors.foreground,
            accent: self.colors.tab_active_background,
        }
    }

    pub fn toolbar_style(&self) -> WidgetStyle {
        WidgetStyle {
            background: self.colors.toolbar_background,
            foreground: self.colors.foreground,
            accent: self.colors.hover,
        }
    }

    pub fn address_bar_style(&self) -> WidgetStyle {
        WidgetStyle {
            background: self.colors.address_bar_background,
            foreground: self.colors.foreground,
            accent: self.colors.border,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Resolved colors for one widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetStyle {
    pub background: Color,
    pub foreground: Color,
    /// Selected tab, hovered button or input border, depending on widget.
    pub accent: Color,
}

/// Chrome widget that can be restyled.
pub trait Themed {
    fn apply_theme(&mut self, theme: &UiTheme);

    fn style(&self) -> &WidgetStyle;
}

/// Process-wide theme toggle.
#[derive(Clone, Debug, Default)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> UiTheme {
        UiTheme::for_mode(self.mode)
    }

    /// Flip Light and Dark, returning the theme to apply.
    pub fn toggle(&mut self) -> UiTheme {
        self.mode = self.mode.flipped();
        tracing::info!(mode = ?self.mode, "theme toggled");
        self.theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut state = ThemeState::default();
        let light = state.theme();

        let dark = state.toggle();
        assert_eq!(dark.mode, ThemeMode::Dark);
        assert_ne!(dark, light);

        let back = state.toggle();
        assert_eq!(back, light);
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_dark_uses_stylesheet_colors() {
        let dark = UiTheme::dark();
        assert_eq!(dark.colors.background.to_string(), "#07090d");
        assert_eq!(dark.toolbar_style().background.to_string(), "#0e121b");
        assert_eq!(dark.address_bar_style().background.to_string(), "#1c2435");
        assert_eq!(dark.tab_strip_style().accent, dark.colors.tab_active_background);
    }

    #[test]
    fn test_mode_serde_names() {
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    }
}
