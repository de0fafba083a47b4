//! Patcher settings - night multipliers and inclusion mode
//!
//! Settings are stored as TOML, one table per record subrecord group:
//!
//! ```toml
//! inclusion = "all-records"
//!
//! [pnam]
//! night = 0.5
//!
//! [nam0]
//! ambient = 0.25
//!
//! [dalc]
//! sides = 0.5
//!
//! [hnam]
//! night = 0.1
//! ```
//!
//! Missing keys fall back to their documented defaults. Validation is a
//! separate, explicit step ([`Settings::validate`]).

pub mod channels;
pub mod types;
mod validation;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use channels::{
    CHANNEL_COUNT, CHANNEL_REGISTRY, Channel, ChannelDef, SettingsGroup, channels_in_group,
};
pub use types::{
    CloudSettings, DirectionalAmbientSettings, InclusionMode, Settings, VolumetricSettings,
    WeatherColorSettings,
};

impl Settings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML or contains unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render the complete settings as TOML
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a TOML file without validating them
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load settings from a TOML file and validate every multiplier
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if any
    /// multiplier is out of range.
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Self::load(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to a TOML file
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
