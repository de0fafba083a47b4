//! Table of color fields the processor visits on each weather record
//!
//! Every entry knows its multiplier channel, how to read its baseline night
//! color and how to reach the matching slot on an override record.

use std::fmt;

use crate::color::Color;
use crate::records::{AmbientColors, WeatherColor, WeatherColors, WeatherRecord};
use crate::settings::Channel;

/// One of the eleven named weather colors (NAM0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    SkyUpper,
    FogNear,
    Ambient,
    Sunlight,
    SkyLower,
    Horizon,
    EffectLighting,
    FogFar,
    SkyStatics,
    Water,
    MoonGlare,
}

impl NamedColor {
    pub const ALL: [NamedColor; 11] = [
        NamedColor::SkyUpper,
        NamedColor::FogNear,
        NamedColor::Ambient,
        NamedColor::Sunlight,
        NamedColor::SkyLower,
        NamedColor::Horizon,
        NamedColor::EffectLighting,
        NamedColor::FogFar,
        NamedColor::SkyStatics,
        NamedColor::Water,
        NamedColor::MoonGlare,
    ];

    #[must_use]
    pub fn channel(self) -> Channel {
        match self {
            Self::SkyUpper => Channel::SkyUpper,
            Self::FogNear => Channel::FogNear,
            Self::Ambient => Channel::Ambient,
            Self::Sunlight => Channel::Sunlight,
            Self::SkyLower => Channel::SkyLower,
            Self::Horizon => Channel::Horizon,
            Self::EffectLighting => Channel::EffectLighting,
            Self::FogFar => Channel::FogFar,
            Self::SkyStatics => Channel::SkyStatics,
            Self::Water => Channel::Water,
            Self::MoonGlare => Channel::MoonGlare,
        }
    }

    fn get(self, colors: &WeatherColors) -> Option<&WeatherColor> {
        match self {
            Self::SkyUpper => colors.sky_upper.as_ref(),
            Self::FogNear => colors.fog_near.as_ref(),
            Self::Ambient => colors.ambient.as_ref(),
            Self::Sunlight => colors.sunlight.as_ref(),
            Self::SkyLower => colors.sky_lower.as_ref(),
            Self::Horizon => colors.horizon.as_ref(),
            Self::EffectLighting => colors.effect_lighting.as_ref(),
            Self::FogFar => colors.fog_far.as_ref(),
            Self::SkyStatics => colors.sky_statics.as_ref(),
            Self::Water => colors.water_multiplier.as_ref(),
            Self::MoonGlare => colors.moon_glare.as_ref(),
        }
    }

    fn get_mut(self, colors: &mut WeatherColors) -> Option<&mut WeatherColor> {
        match self {
            Self::SkyUpper => colors.sky_upper.as_mut(),
            Self::FogNear => colors.fog_near.as_mut(),
            Self::Ambient => colors.ambient.as_mut(),
            Self::Sunlight => colors.sunlight.as_mut(),
            Self::SkyLower => colors.sky_lower.as_mut(),
            Self::Horizon => colors.horizon.as_mut(),
            Self::EffectLighting => colors.effect_lighting.as_mut(),
            Self::FogFar => colors.fog_far.as_mut(),
            Self::SkyStatics => colors.sky_statics.as_mut(),
            Self::Water => colors.water_multiplier.as_mut(),
            Self::MoonGlare => colors.moon_glare.as_mut(),
        }
    }
}

/// One of the seven directional ambient night components (DALC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmbientDirection {
    XPlus,
    XMinus,
    YPlus,
    YMinus,
    ZMinus,
    ZPlus,
    Specular,
}

impl AmbientDirection {
    pub const ALL: [AmbientDirection; 7] = [
        AmbientDirection::XPlus,
        AmbientDirection::XMinus,
        AmbientDirection::YPlus,
        AmbientDirection::YMinus,
        AmbientDirection::ZMinus,
        AmbientDirection::ZPlus,
        AmbientDirection::Specular,
    ];

    /// The four side directions share one multiplier
    #[must_use]
    pub fn channel(self) -> Channel {
        match self {
            Self::XPlus | Self::XMinus | Self::YPlus | Self::YMinus => Channel::AmbientSides,
            Self::ZMinus => Channel::AmbientDown,
            Self::ZPlus => Channel::AmbientUp,
            Self::Specular => Channel::AmbientSpecular,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::XPlus => "+X",
            Self::XMinus => "-X",
            Self::YPlus => "+Y",
            Self::YMinus => "-Y",
            Self::ZMinus => "-Z",
            Self::ZPlus => "+Z",
            Self::Specular => "specular",
        }
    }

    fn get(self, colors: &AmbientColors) -> Option<Color> {
        match self {
            Self::XPlus => colors.x_plus,
            Self::XMinus => colors.x_minus,
            Self::YPlus => colors.y_plus,
            Self::YMinus => colors.y_minus,
            Self::ZMinus => colors.z_minus,
            Self::ZPlus => colors.z_plus,
            Self::Specular => colors.specular,
        }
    }

    fn slot_mut(self, colors: &mut AmbientColors) -> &mut Option<Color> {
        match self {
            Self::XPlus => &mut colors.x_plus,
            Self::XMinus => &mut colors.x_minus,
            Self::YPlus => &mut colors.y_plus,
            Self::YMinus => &mut colors.y_minus,
            Self::ZMinus => &mut colors.z_minus,
            Self::ZPlus => &mut colors.z_plus,
            Self::Specular => &mut colors.specular,
        }
    }
}

/// A night color slot on a weather record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    /// Night color of the cloud layer at this index (PNAM)
    CloudLayer(usize),
    /// Night value of a named weather color (NAM0)
    Weather(NamedColor),
    /// Night directional ambient component (DALC)
    Ambient(AmbientDirection),
}

impl ColorField {
    /// Fields to visit for a baseline record, in processing order
    ///
    /// Directional ambient fields are only listed when the baseline has a
    /// night block.
    #[must_use]
    pub fn for_record(record: &WeatherRecord) -> Vec<ColorField> {
        let mut fields: Vec<ColorField> = (0..record.clouds.len())
            .map(ColorField::CloudLayer)
            .collect();
        fields.extend(NamedColor::ALL.into_iter().map(ColorField::Weather));

        let has_night_ambient = record
            .directional_ambient
            .as_ref()
            .is_some_and(|dalc| dalc.night.is_some());
        if has_night_ambient {
            fields.extend(AmbientDirection::ALL.into_iter().map(ColorField::Ambient));
        }
        fields
    }

    /// Multiplier channel for this field
    #[must_use]
    pub fn channel(self) -> Channel {
        match self {
            Self::CloudLayer(_) => Channel::CloudColor,
            Self::Weather(named) => named.channel(),
            Self::Ambient(direction) => direction.channel(),
        }
    }

    /// Baseline night color, `None` when absent at any level
    #[must_use]
    pub fn baseline(self, record: &WeatherRecord) -> Option<Color> {
        match self {
            Self::CloudLayer(index) => record.clouds.get(index)?.colors.as_ref()?.night,
            Self::Weather(named) => named.get(&record.colors)?.night,
            Self::Ambient(direction) => {
                direction.get(record.directional_ambient.as_ref()?.night.as_ref()?)
            }
        }
    }

    /// Value held in the slot [`ColorField::slot_mut`] would return; the
    /// outer `None` means the record lacks the containing structure
    #[must_use]
    pub fn current(self, record: &WeatherRecord) -> Option<Option<Color>> {
        match self {
            Self::CloudLayer(index) => Some(record.clouds.get(index)?.colors.as_ref()?.night),
            Self::Weather(named) => Some(named.get(&record.colors)?.night),
            Self::Ambient(direction) => Some(
                direction.get(record.directional_ambient.as_ref()?.night.as_ref()?),
            ),
        }
    }

    /// Night slot on an override record, `None` when the record lacks the
    /// containing structure (missing layer, color block or night block)
    pub fn slot_mut(self, record: &mut WeatherRecord) -> Option<&mut Option<Color>> {
        match self {
            Self::CloudLayer(index) => Some(&mut record.clouds.get_mut(index)?.colors.as_mut()?.night),
            Self::Weather(named) => Some(&mut named.get_mut(&mut record.colors)?.night),
            Self::Ambient(direction) => Some(
                direction.slot_mut(record.directional_ambient.as_mut()?.night.as_mut()?),
            ),
        }
    }
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloudLayer(index) => write!(f, "cloud layer {index}"),
            Self::Weather(named) => f.write_str(named.channel().name()),
            Self::Ambient(direction) => write!(f, "directional ambient {}", direction.as_str()),
        }
    }
}
