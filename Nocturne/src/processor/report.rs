//! Run summary

use std::fmt;

use serde::Serialize;

/// Counters for one patch run
///
/// - `weather_changes`: weather records that wrote at least one of their own
///   color fields, or whose night volumetric link produced the volumetric
///   override while that record was being processed. A weather that only
///   shares an already-processed volumetric record is not counted.
/// - `color_changes`: individual field writes; each distinct volumetric
///   record written counts once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunReport {
    pub weather_changes: usize,
    pub color_changes: usize,
}

impl RunReport {
    /// Whether the run wrote anything
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.color_changes > 0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather records changed: {}. Color fields adjusted: {}.",
            self.weather_changes, self.color_changes
        )
    }
}
