//! In-memory record store
//!
//! [`LoadOrder`] holds already-resolved winning records and answers link
//! lookups. [`PatchMod`] collects overrides. Both round-trip through JSON.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{FormKey, LinkCache, OverrideTarget, VolumetricLightingRecord, WeatherRecord};
use crate::error::Result;
use crate::settings::InclusionMode;

/// Winning weather and volumetric lighting records of a load order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadOrder {
    /// Winning weather overrides, in priority order
    #[serde(default)]
    pub weathers: Vec<WeatherRecord>,
    /// Winning volumetric lighting records by identity
    #[serde(default)]
    pub volumetric_lightings: IndexMap<FormKey, VolumetricLightingRecord>,
}

impl LoadOrder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a load order from JSON
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a load order from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading load order from {}", path.display());
        let load_order = Self::from_json_str(&fs::read_to_string(path)?)?;
        tracing::info!(
            "Loaded {} weathers, {} volumetric lighting records",
            load_order.weathers.len(),
            load_order.volumetric_lightings.len()
        );
        Ok(load_order)
    }

    /// Add a winning weather record
    pub fn push_weather(&mut self, record: WeatherRecord) {
        self.weathers.push(record);
    }

    /// Add (or replace) a volumetric lighting record
    pub fn insert_volumetric(&mut self, record: VolumetricLightingRecord) {
        self.volumetric_lightings
            .insert(record.form_key.clone(), record);
    }

    /// Weathers selected by an inclusion mode, in priority order
    pub fn weathers(&self, mode: InclusionMode) -> impl Iterator<Item = &WeatherRecord> {
        self.weathers.iter().filter(move |weather| match mode {
            InclusionMode::AllRecords => true,
            InclusionMode::BaseContentOnly => weather.form_key.is_base_content(),
        })
    }
}

impl LinkCache for LoadOrder {
    fn resolve_volumetric(&self, key: &FormKey) -> Option<&VolumetricLightingRecord> {
        self.volumetric_lightings.get(key)
    }
}

/// Override records produced by a patch run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchMod {
    pub name: String,
    #[serde(default)]
    pub weathers: IndexMap<FormKey, WeatherRecord>,
    #[serde(default)]
    pub volumetric_lightings: IndexMap<FormKey, VolumetricLightingRecord>,
}

impl PatchMod {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Total override records
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.weathers.len() + self.volumetric_lightings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Render as pretty JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write as pretty JSON
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
        fs::write(path, self.to_json_string()?)?;
        tracing::info!(
            "Wrote {} override records to {}",
            self.record_count(),
            path.display()
        );
        Ok(())
    }
}

impl OverrideTarget for PatchMod {
    fn existing_weather_override(&self, key: &FormKey) -> Option<&WeatherRecord> {
        self.weathers.get(key)
    }

    fn weather_override(&mut self, baseline: &WeatherRecord) -> &mut WeatherRecord {
        self.weathers
            .entry(baseline.form_key.clone())
            .or_insert_with(|| {
                tracing::trace!("Creating weather override {}", baseline.form_key);
                baseline.clone()
            })
    }

    fn volumetric_override(
        &mut self,
        baseline: &VolumetricLightingRecord,
    ) -> &mut VolumetricLightingRecord {
        self.volumetric_lightings
            .entry(baseline.form_key.clone())
            .or_insert_with(|| {
                tracing::trace!("Creating volumetric lighting override {}", baseline.form_key);
                baseline.clone()
            })
    }
}
