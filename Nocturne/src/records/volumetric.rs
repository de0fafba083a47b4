//! Volumetric lighting record model

use serde::{Deserialize, Serialize};

use super::form_key::FormKey;
use crate::color::{Color, to_byte_channel};

/// A volumetric lighting record, shared by reference between weathers
///
/// Channels are stored as floats in `[0, 255]`, as the game does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumetricLightingRecord {
    pub form_key: FormKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(default)]
    pub intensity: Option<f32>,
    #[serde(default)]
    pub color_r: Option<f32>,
    #[serde(default)]
    pub color_g: Option<f32>,
    #[serde(default)]
    pub color_b: Option<f32>,
}

impl VolumetricLightingRecord {
    /// Record with only a color set
    #[must_use]
    pub fn with_color(form_key: FormKey, r: f32, g: f32, b: f32) -> Self {
        Self {
            form_key,
            editor_id: None,
            intensity: None,
            color_r: Some(r),
            color_g: Some(g),
            color_b: Some(b),
        }
    }

    /// Float channels, when all three are present
    #[must_use]
    pub fn channels(&self) -> Option<(f32, f32, f32)> {
        Some((self.color_r?, self.color_g?, self.color_b?))
    }

    /// Channels as a byte color (rounded, clamped), when all three are present
    #[must_use]
    pub fn byte_color(&self) -> Option<Color> {
        let (r, g, b) = self.channels()?;
        Some(Color::rgb(
            to_byte_channel(r),
            to_byte_channel(g),
            to_byte_channel(b),
        ))
    }

    /// Store a byte color back into the float channels
    pub fn set_byte_color(&mut self, color: Color) {
        self.color_r = Some(f32::from(color.r));
        self.color_g = Some(f32::from(color.g));
        self.color_b = Some(f32::from(color.b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_channel() {
        let mut record = VolumetricLightingRecord::with_color(FormKey::new(1, "Skyrim.esm"), 1.0, 2.0, 3.0);
        record.color_g = None;
        assert!(record.channels().is_none());
        assert!(record.byte_color().is_none());
    }

    #[test]
    fn test_byte_color_rounds() {
        let record =
            VolumetricLightingRecord::with_color(FormKey::new(1, "Skyrim.esm"), 10.5, 99.4, 260.0);
        assert_eq!(record.byte_color(), Some(Color::rgb(11, 99, 255)));
    }

    #[test]
    fn test_set_byte_color() {
        let mut record =
            VolumetricLightingRecord::with_color(FormKey::new(1, "Skyrim.esm"), 0.0, 0.0, 0.0);
        record.set_byte_color(Color::rgb(5, 6, 7));
        assert_eq!(record.channels(), Some((5.0, 6.0, 7.0)));
    }
}
