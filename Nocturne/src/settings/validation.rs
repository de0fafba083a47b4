//! Multiplier range validation

use crate::error::{Error, Result};

use super::channels::CHANNEL_REGISTRY;
use super::types::Settings;

impl Settings {
    /// Check every multiplier lies in `[0, 1]`.
    ///
    /// Channels are visited in registry order and the first offending one is
    /// reported by its logical name. NaN is rejected.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMultiplier`] naming the first bad channel.
    pub fn validate(&self) -> Result<()> {
        for def in CHANNEL_REGISTRY {
            validate_range(self.multiplier(def.channel), def.name)?;
        }
        Ok(())
    }
}

fn validate_range(value: f64, name: &'static str) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidMultiplier { field: name, value })
    }
}
