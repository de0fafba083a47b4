//! Weather record model

use serde::{Deserialize, Serialize};

use super::form_key::FormKey;
use crate::color::Color;

/// Color by time of day
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherColor {
    pub sunrise: Option<Color>,
    pub day: Option<Color>,
    pub sunset: Option<Color>,
    pub night: Option<Color>,
}

impl WeatherColor {
    /// Only a night value set
    #[must_use]
    pub fn night(color: Color) -> Self {
        Self {
            night: Some(color),
            ..Self::default()
        }
    }
}

/// One cloud layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudLayer {
    pub enabled: bool,
    pub texture: Option<String>,
    pub colors: Option<WeatherColor>,
}

/// The eleven named weather colors (NAM0)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherColors {
    pub sky_upper: Option<WeatherColor>,
    pub fog_near: Option<WeatherColor>,
    pub ambient: Option<WeatherColor>,
    pub sunlight: Option<WeatherColor>,
    pub sky_lower: Option<WeatherColor>,
    pub horizon: Option<WeatherColor>,
    pub effect_lighting: Option<WeatherColor>,
    pub fog_far: Option<WeatherColor>,
    pub sky_statics: Option<WeatherColor>,
    pub water_multiplier: Option<WeatherColor>,
    pub moon_glare: Option<WeatherColor>,
}

/// Directional ambient colors for one time of day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientColors {
    pub x_plus: Option<Color>,
    pub x_minus: Option<Color>,
    pub y_plus: Option<Color>,
    pub y_minus: Option<Color>,
    pub z_plus: Option<Color>,
    pub z_minus: Option<Color>,
    pub specular: Option<Color>,
    pub fresnel_power: Option<f32>,
}

/// Directional ambient lighting (DALC) by time of day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalAmbientLighting {
    pub sunrise: Option<AmbientColors>,
    pub day: Option<AmbientColors>,
    pub sunset: Option<AmbientColors>,
    pub night: Option<AmbientColors>,
}

/// Volumetric lighting links (HNAM) by time of day
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumetricLightingLinks {
    pub sunrise: Option<FormKey>,
    pub day: Option<FormKey>,
    pub sunset: Option<FormKey>,
    pub night: Option<FormKey>,
}

/// A weather record as resolved from the load order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub form_key: FormKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clouds: Vec<CloudLayer>,
    #[serde(default)]
    pub colors: WeatherColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directional_ambient: Option<DirectionalAmbientLighting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumetric_lighting: Option<VolumetricLightingLinks>,
}

impl WeatherRecord {
    /// An empty weather record
    #[must_use]
    pub fn new(form_key: FormKey) -> Self {
        Self {
            form_key,
            editor_id: None,
            clouds: Vec::new(),
            colors: WeatherColors::default(),
            directional_ambient: None,
            volumetric_lighting: None,
        }
    }

    /// Set the editor id
    #[must_use]
    pub fn with_editor_id(mut self, editor_id: impl Into<String>) -> Self {
        self.editor_id = Some(editor_id.into());
        self
    }

    /// Night link to a volumetric lighting record, if any
    #[must_use]
    pub fn night_volumetric_link(&self) -> Option<&FormKey> {
        self.volumetric_lighting.as_ref()?.night.as_ref()
    }

    /// Name for log lines: editor id when present, else the form key
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.editor_id {
            Some(editor_id) => format!("{editor_id} [{}]", self.form_key),
            None => self.form_key.to_string(),
        }
    }
}
