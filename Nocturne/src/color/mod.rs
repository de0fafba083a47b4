//! Color values and the shared night-dimming primitive
//!
//! Weather fields store 8-bit colors. Volumetric lighting stores float
//! channels; those are converted to bytes at the boundary (see
//! [`scale::to_byte_channel`]) so every color is scaled by the same code.

pub mod scale;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use scale::{
    ACHROMATIC_TOLERANCE, is_achromatic, is_trivial, scale_channel, scale_color,
    scale_float_channel, scaled_change, to_byte_channel,
};

/// An 8-bit RGB color with an alpha byte that is carried but never scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub a: u8,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if passes by reference
fn is_zero(value: &u8) -> bool {
    *value == 0
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Three-channel color (alpha 0)
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0 }
    }

    /// Four-channel color
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same alpha, new color channels
    #[must_use]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: self.a }
    }

    /// Whether R, G and B are all zero (alpha ignored)
    #[must_use]
    pub fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Whether R, G and B are all 255 (alpha ignored)
    #[must_use]
    pub fn is_white(self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_ignore_alpha() {
        assert!(Color::rgba(0, 0, 0, 255).is_black());
        assert!(Color::rgba(255, 255, 255, 7).is_white());
        assert!(!Color::rgb(255, 255, 254).is_white());
    }

    #[test]
    fn test_json_alpha_optional() {
        let color: Color = serde_json::from_str(r#"{"r":10,"g":20,"b":30}"#).unwrap();
        assert_eq!(color, Color::rgb(10, 20, 30));
        assert_eq!(serde_json::to_string(&color).unwrap(), r#"{"r":10,"g":20,"b":30}"#);

        let with_alpha = Color::rgba(1, 2, 3, 4);
        let text = serde_json::to_string(&with_alpha).unwrap();
        assert_eq!(serde_json::from_str::<Color>(&text).unwrap(), with_alpha);
    }
}
