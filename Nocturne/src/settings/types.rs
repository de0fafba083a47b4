//! Settings file types
//!
//! Multipliers are grouped by the record subrecord they scale. Every key is
//! optional in the file and falls back to the documented default.

use serde::{Deserialize, Serialize};

use super::channels::Channel;

// Default value functions for serde
fn default_cloud_color() -> f64 {
    Channel::CloudColor.default_multiplier()
}
fn default_sky_upper() -> f64 {
    Channel::SkyUpper.default_multiplier()
}
fn default_fog_near() -> f64 {
    Channel::FogNear.default_multiplier()
}
fn default_ambient() -> f64 {
    Channel::Ambient.default_multiplier()
}
fn default_sunlight() -> f64 {
    Channel::Sunlight.default_multiplier()
}
fn default_sky_lower() -> f64 {
    Channel::SkyLower.default_multiplier()
}
fn default_horizon() -> f64 {
    Channel::Horizon.default_multiplier()
}
fn default_effect_lighting() -> f64 {
    Channel::EffectLighting.default_multiplier()
}
fn default_fog_far() -> f64 {
    Channel::FogFar.default_multiplier()
}
fn default_sky_statics() -> f64 {
    Channel::SkyStatics.default_multiplier()
}
fn default_water() -> f64 {
    Channel::Water.default_multiplier()
}
fn default_moon_glare() -> f64 {
    Channel::MoonGlare.default_multiplier()
}
fn default_ambient_sides() -> f64 {
    Channel::AmbientSides.default_multiplier()
}
fn default_ambient_down() -> f64 {
    Channel::AmbientDown.default_multiplier()
}
fn default_ambient_up() -> f64 {
    Channel::AmbientUp.default_multiplier()
}
fn default_ambient_specular() -> f64 {
    Channel::AmbientSpecular.default_multiplier()
}
fn default_volumetric_lighting() -> f64 {
    Channel::VolumetricLighting.default_multiplier()
}

/// Which weather records the record store hands to the patcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InclusionMode {
    /// Every winning weather record in the load order
    #[default]
    AllRecords,
    /// Only weathers defined by the base game masters
    BaseContentOnly,
}

impl InclusionMode {
    /// Human-readable label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllRecords => "all records",
            Self::BaseContentOnly => "base content only",
        }
    }
}

/// Cloud layer (PNAM) multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudSettings {
    #[serde(default = "default_cloud_color")]
    pub night: f64,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            night: default_cloud_color(),
        }
    }
}

/// Weather color (NAM0) multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherColorSettings {
    #[serde(default = "default_sky_upper")]
    pub sky_upper: f64,
    #[serde(default = "default_fog_near")]
    pub fog_near: f64,
    #[serde(default = "default_ambient")]
    pub ambient: f64,
    #[serde(default = "default_sunlight")]
    pub sunlight: f64,
    #[serde(default = "default_sky_lower")]
    pub sky_lower: f64,
    #[serde(default = "default_horizon")]
    pub horizon: f64,
    #[serde(default = "default_effect_lighting")]
    pub effect_lighting: f64,
    #[serde(default = "default_fog_far")]
    pub fog_far: f64,
    #[serde(default = "default_sky_statics")]
    pub sky_statics: f64,
    #[serde(default = "default_water")]
    pub water: f64,
    #[serde(default = "default_moon_glare")]
    pub moon_glare: f64,
}

impl Default for WeatherColorSettings {
    fn default() -> Self {
        Self {
            sky_upper: default_sky_upper(),
            fog_near: default_fog_near(),
            ambient: default_ambient(),
            sunlight: default_sunlight(),
            sky_lower: default_sky_lower(),
            horizon: default_horizon(),
            effect_lighting: default_effect_lighting(),
            fog_far: default_fog_far(),
            sky_statics: default_sky_statics(),
            water: default_water(),
            moon_glare: default_moon_glare(),
        }
    }
}

/// Directional ambient lighting (DALC) multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectionalAmbientSettings {
    /// +X, -X, +Y and -Y
    #[serde(default = "default_ambient_sides")]
    pub sides: f64,
    /// Z-
    #[serde(default = "default_ambient_down")]
    pub down: f64,
    /// Z+
    #[serde(default = "default_ambient_up")]
    pub up: f64,
    #[serde(default = "default_ambient_specular")]
    pub specular: f64,
}

impl Default for DirectionalAmbientSettings {
    fn default() -> Self {
        Self {
            sides: default_ambient_sides(),
            down: default_ambient_down(),
            up: default_ambient_up(),
            specular: default_ambient_specular(),
        }
    }
}

/// Volumetric lighting (HNAM) multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolumetricSettings {
    #[serde(default = "default_volumetric_lighting")]
    pub night: f64,
}

impl Default for VolumetricSettings {
    fn default() -> Self {
        Self {
            night: default_volumetric_lighting(),
        }
    }
}

/// Complete patcher settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub inclusion: InclusionMode,
    #[serde(default)]
    pub pnam: CloudSettings,
    #[serde(default)]
    pub nam0: WeatherColorSettings,
    #[serde(default)]
    pub dalc: DirectionalAmbientSettings,
    #[serde(default)]
    pub hnam: VolumetricSettings,
}

impl Settings {
    /// Multiplier for a channel
    #[must_use]
    pub fn multiplier(&self, channel: Channel) -> f64 {
        match channel {
            Channel::CloudColor => self.pnam.night,
            Channel::SkyUpper => self.nam0.sky_upper,
            Channel::FogNear => self.nam0.fog_near,
            Channel::Ambient => self.nam0.ambient,
            Channel::Sunlight => self.nam0.sunlight,
            Channel::SkyLower => self.nam0.sky_lower,
            Channel::Horizon => self.nam0.horizon,
            Channel::EffectLighting => self.nam0.effect_lighting,
            Channel::FogFar => self.nam0.fog_far,
            Channel::SkyStatics => self.nam0.sky_statics,
            Channel::Water => self.nam0.water,
            Channel::MoonGlare => self.nam0.moon_glare,
            Channel::AmbientSides => self.dalc.sides,
            Channel::AmbientDown => self.dalc.down,
            Channel::AmbientUp => self.dalc.up,
            Channel::AmbientSpecular => self.dalc.specular,
            Channel::VolumetricLighting => self.hnam.night,
        }
    }

    /// Mutable access to a channel's multiplier
    pub fn multiplier_mut(&mut self, channel: Channel) -> &mut f64 {
        match channel {
            Channel::CloudColor => &mut self.pnam.night,
            Channel::SkyUpper => &mut self.nam0.sky_upper,
            Channel::FogNear => &mut self.nam0.fog_near,
            Channel::Ambient => &mut self.nam0.ambient,
            Channel::Sunlight => &mut self.nam0.sunlight,
            Channel::SkyLower => &mut self.nam0.sky_lower,
            Channel::Horizon => &mut self.nam0.horizon,
            Channel::EffectLighting => &mut self.nam0.effect_lighting,
            Channel::FogFar => &mut self.nam0.fog_far,
            Channel::SkyStatics => &mut self.nam0.sky_statics,
            Channel::Water => &mut self.nam0.water,
            Channel::MoonGlare => &mut self.nam0.moon_glare,
            Channel::AmbientSides => &mut self.dalc.sides,
            Channel::AmbientDown => &mut self.dalc.down,
            Channel::AmbientUp => &mut self.dalc.up,
            Channel::AmbientSpecular => &mut self.dalc.specular,
            Channel::VolumetricLighting => &mut self.hnam.night,
        }
    }
}
