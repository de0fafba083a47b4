//! On-demand override acquisition

use crate::records::{OverrideTarget, WeatherRecord};

/// Asks the target for a weather override the first time a write needs one
///
/// Records that never change never get an override.
pub(crate) struct LazyOverride<'a, T: OverrideTarget + ?Sized> {
    target: Option<&'a mut T>,
    baseline: &'a WeatherRecord,
    record: Option<&'a mut WeatherRecord>,
}

impl<'a, T: OverrideTarget + ?Sized> LazyOverride<'a, T> {
    pub(crate) fn new(target: &'a mut T, baseline: &'a WeatherRecord) -> Self {
        Self {
            target: Some(target),
            baseline,
            record: None,
        }
    }

    /// The override record, created on first call
    pub(crate) fn get(&mut self) -> Option<&mut WeatherRecord> {
        if self.record.is_none() {
            let target = self.target.take()?;
            self.record = Some(target.weather_override(self.baseline));
        }
        self.record.as_deref_mut()
    }

    /// The record a write would land on, without creating an override
    ///
    /// Before creation this is the target's existing override, or the
    /// baseline a new one would be copied from.
    pub(crate) fn peek(&self) -> &WeatherRecord {
        if let Some(record) = self.record.as_deref() {
            return record;
        }
        self.target
            .as_deref()
            .and_then(|target| target.existing_weather_override(&self.baseline.form_key))
            .unwrap_or(self.baseline)
    }

    pub(crate) fn is_created(&self) -> bool {
        self.record.is_some()
    }
}
