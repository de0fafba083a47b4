//! Record model and the seams to the record store
//!
//! The patcher never resolves load orders itself. It reads baseline records
//! handed to it, follows links through a [`LinkCache`], and writes through an
//! [`OverrideTarget`]. [`store`] provides in-memory implementations of both.

pub mod form_key;
pub mod store;
pub mod volumetric;
pub mod weather;

pub use form_key::{BASE_MASTERS, FormKey};
pub use store::{LoadOrder, PatchMod};
pub use volumetric::VolumetricLightingRecord;
pub use weather::{
    AmbientColors, CloudLayer, DirectionalAmbientLighting, VolumetricLightingLinks, WeatherColor,
    WeatherColors, WeatherRecord,
};

/// Resolves links to shared records
pub trait LinkCache {
    /// The volumetric lighting record with this identity, if it exists
    fn resolve_volumetric(&self, key: &FormKey) -> Option<&VolumetricLightingRecord>;
}

/// Receives override records
///
/// Both methods are get-or-create: repeated calls for the same identity
/// within a run must return the same record, initialized from the baseline
/// on first use.
pub trait OverrideTarget {
    fn weather_override(&mut self, baseline: &WeatherRecord) -> &mut WeatherRecord;

    /// The weather override already held for `key`, if any. Never creates one.
    fn existing_weather_override(&self, _key: &FormKey) -> Option<&WeatherRecord> {
        None
    }

    fn volumetric_override(
        &mut self,
        baseline: &VolumetricLightingRecord,
    ) -> &mut VolumetricLightingRecord;
}
