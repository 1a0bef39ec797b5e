//! Color representation for chrome styling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with 8-bit components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Lighten (positive factor) or darken (negative factor) the color.
    pub fn adjust_lightness(&self, factor: f32) -> Color {
        let adjust = |c: u8| -> u8 {
            if factor > 0.0 {
                (c as f32 + (255.0 - c as f32) * factor).min(255.0) as u8
            } else {
                (c as f32 * (1.0 + factor)).max(0.0) as u8
            }
        };

        Color::rgba(adjust(self.r), adjust(self.g), adjust(self.b), self.a)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_constructor() {
        assert_eq!(Color::from_rgb_u32(0x0E121B), Color::rgb(14, 18, 27));
    }

    #[test]
    fn test_display_is_css_hex() {
        assert_eq!(Color::from_rgb_u32(0x1C2435).to_string(), "#1c2435");
        assert_eq!(Color::rgba(0, 0, 0, 0).to_string(), "#00000000");
    }

    #[test]
    fn test_adjust_lightness() {
        let base = Color::rgb(100, 100, 100);
        assert!(base.adjust_lightness(0.5).r > 100);
        assert!(base.adjust_lightness(-0.5).r < 100);
        assert_eq!(base.adjust_lightness(0.0), base);
    }
}
