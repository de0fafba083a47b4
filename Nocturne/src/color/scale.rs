//! Night-dimming algorithm
//!
//! 1. Trivial colors (empty, pure black, pure white) are never touched.
//! 2. R, G and B are scaled independently: `round(channel * multiplier)`,
//!    rounding half away from zero, clamped to `[0, 255]`. Alpha is copied.
//! 3. A result equal to the baseline is a no-op.

use super::Color;

/// Tolerance for treating a float volumetric channel as 0 or 255
pub const ACHROMATIC_TOLERANCE: f32 = 0.01;

/// Scale one byte channel
///
/// `f64::round` rounds half away from zero, which keeps results identical
/// across platforms.
#[must_use]
pub fn scale_channel(value: u8, multiplier: f64) -> u8 {
    let scaled = (f64::from(value) * multiplier).round();
    scaled.clamp(0.0, 255.0) as u8
}

/// Scale R, G and B of a color, keeping alpha
#[must_use]
pub fn scale_color(color: Color, multiplier: f64) -> Color {
    color.with_rgb(
        scale_channel(color.r, multiplier),
        scale_channel(color.g, multiplier),
        scale_channel(color.b, multiplier),
    )
}

/// Whether a baseline carries no meaningful tint
#[must_use]
pub fn is_trivial(color: Option<Color>) -> bool {
    color.is_none_or(|c| c.is_black() || c.is_white())
}

/// The scaled color, or `None` when the baseline must be left alone
///
/// `None` covers both trivial baselines and scaling that does not move any
/// channel (e.g. a multiplier of 1.0).
#[must_use]
pub fn scaled_change(baseline: Option<Color>, multiplier: f64) -> Option<Color> {
    if is_trivial(baseline) {
        return None;
    }
    let baseline = baseline?;
    let scaled = scale_color(baseline, multiplier);
    (scaled != baseline).then_some(scaled)
}

/// Convert a float volumetric channel to a byte, rounding half away from zero
#[must_use]
pub fn to_byte_channel(value: f32) -> u8 {
    f64::from(value).round().clamp(0.0, 255.0) as u8
}

/// Scale a float volumetric channel straight to a byte, rounding once
#[must_use]
pub fn scale_float_channel(value: f32, multiplier: f64) -> u8 {
    (f64::from(value) * multiplier).round().clamp(0.0, 255.0) as u8
}

fn is_approximately(value: f32, target: f32) -> bool {
    (value - target).abs() <= ACHROMATIC_TOLERANCE
}

/// Whether float channels are all (within tolerance) black or all white
#[must_use]
pub fn is_achromatic(r: f32, g: f32, b: f32) -> bool {
    let all = |target: f32| [r, g, b].into_iter().all(|c| is_approximately(c, target));
    all(0.0) || all(255.0)
}
