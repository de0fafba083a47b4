//! Channel registry - single source of truth for every night multiplier

use std::fmt;

/// Record subrecord group a multiplier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsGroup {
    /// Cloud layer colors
    Pnam,
    /// Named weather colors
    Nam0,
    /// Directional ambient lighting colors
    Dalc,
    /// Volumetric lighting
    Hnam,
}

impl SettingsGroup {
    /// Subrecord signature as shown to users
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pnam => "PNAM",
            Self::Nam0 => "NAM0",
            Self::Dalc => "DALC",
            Self::Hnam => "HNAM",
        }
    }

    /// Table name used in the settings file
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::Pnam => "pnam",
            Self::Nam0 => "nam0",
            Self::Dalc => "dalc",
            Self::Hnam => "hnam",
        }
    }
}

impl fmt::Display for SettingsGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical night-time lighting channel with its own multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    CloudColor,
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
    AmbientSides,
    AmbientDown,
    AmbientUp,
    AmbientSpecular,
    VolumetricLighting,
}

/// Number of independent multipliers
pub const CHANNEL_COUNT: usize = 17;

impl Channel {
    /// Every channel, in validation order
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::CloudColor,
        Channel::SkyUpper,
        Channel::FogNear,
        Channel::Ambient,
        Channel::Sunlight,
        Channel::SkyLower,
        Channel::Horizon,
        Channel::EffectLighting,
        Channel::FogFar,
        Channel::SkyStatics,
        Channel::Water,
        Channel::MoonGlare,
        Channel::AmbientSides,
        Channel::AmbientDown,
        Channel::AmbientUp,
        Channel::AmbientSpecular,
        Channel::VolumetricLighting,
    ];

    /// Registry entry for this channel
    #[must_use]
    pub fn def(self) -> &'static ChannelDef {
        &CHANNEL_REGISTRY[self as usize]
    }

    /// Logical name (e.g. `sky-upper`), used in error messages
    #[must_use]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Documented default multiplier
    #[must_use]
    pub fn default_multiplier(self) -> f64 {
        self.def().default
    }

    /// Look up a channel by logical name (`moon_glare` and `moon-glare` both match)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        CHANNEL_REGISTRY
            .iter()
            .find(|def| def.name == normalized)
            .map(|def| def.channel)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Definition of a single multiplier setting
#[derive(Debug, Clone, Copy)]
pub struct ChannelDef {
    pub channel: Channel,
    /// Logical name (e.g. "`moon-glare`")
    pub name: &'static str,
    /// Group (and settings table) the key lives in
    pub group: SettingsGroup,
    /// Key inside the group's table
    pub key: &'static str,
    /// Human-readable label for settings UIs
    pub label: &'static str,
    /// Tooltip text for settings UIs
    pub tooltip: &'static str,
    /// Default multiplier
    pub default: f64,
}

/// Complete registry of all multipliers
/// Order matches `Channel` discriminants and determines validation order
pub const CHANNEL_REGISTRY: &[ChannelDef] = &[
    // PNAM (1)
    ChannelDef {
        channel: Channel::CloudColor,
        name: "cloud-color",
        group: SettingsGroup::Pnam,
        key: "night",
        label: "Cloud Color (Night)",
        tooltip: "Multiplier for the night color of every cloud layer.",
        default: 0.50,
    },
    // NAM0 (11)
    ChannelDef {
        channel: Channel::SkyUpper,
        name: "sky-upper",
        group: SettingsGroup::Nam0,
        key: "sky_upper",
        label: "Sky Upper (Night)",
        tooltip: "Multiplier for the upper sky color at night.",
        default: 0.33,
    },
    ChannelDef {
        channel: Channel::FogNear,
        name: "fog-near",
        group: SettingsGroup::Nam0,
        key: "fog_near",
        label: "Fog Near (Night)",
        tooltip: "Multiplier for the near fog color at night.",
        default: 0.33,
    },
    ChannelDef {
        channel: Channel::Ambient,
        name: "ambient",
        group: SettingsGroup::Nam0,
        key: "ambient",
        label: "Ambient (Night)",
        tooltip: "Multiplier for the ambient weather color at night.",
        default: 0.25,
    },
    ChannelDef {
        channel: Channel::Sunlight,
        name: "sunlight",
        group: SettingsGroup::Nam0,
        key: "sunlight",
        label: "Sunlight (Night)",
        tooltip: "Multiplier for the sunlight color at night (moonlight in practice).",
        default: 0.25,
    },
    ChannelDef {
        channel: Channel::SkyLower,
        name: "sky-lower",
        group: SettingsGroup::Nam0,
        key: "sky_lower",
        label: "Sky Lower (Night)",
        tooltip: "Multiplier for the lower sky color at night.",
        default: 0.33,
    },
    ChannelDef {
        channel: Channel::Horizon,
        name: "horizon",
        group: SettingsGroup::Nam0,
        key: "horizon",
        label: "Horizon (Night)",
        tooltip: "Multiplier for the horizon color at night.",
        default: 0.33,
    },
    ChannelDef {
        channel: Channel::EffectLighting,
        name: "effect-lighting",
        group: SettingsGroup::Nam0,
        key: "effect_lighting",
        label: "Effect Lighting (Night)",
        tooltip: "Multiplier for effect lighting at night. 1.0 leaves it untouched.",
        default: 1.00,
    },
    ChannelDef {
        channel: Channel::FogFar,
        name: "fog-far",
        group: SettingsGroup::Nam0,
        key: "fog_far",
        label: "Fog Far (Night)",
        tooltip: "Multiplier for the far fog color at night.",
        default: 0.33,
    },
    ChannelDef {
        channel: Channel::SkyStatics,
        name: "sky-statics",
        group: SettingsGroup::Nam0,
        key: "sky_statics",
        label: "Sky Statics (Night)",
        tooltip: "Multiplier for sky statics (distant mountains, moons) at night.",
        default: 0.50,
    },
    ChannelDef {
        channel: Channel::Water,
        name: "water",
        group: SettingsGroup::Nam0,
        key: "water",
        label: "Water Multiplier (Night)",
        tooltip: "Multiplier for the water tint color at night.",
        default: 0.50,
    },
    ChannelDef {
        channel: Channel::MoonGlare,
        name: "moon-glare",
        group: SettingsGroup::Nam0,
        key: "moon_glare",
        label: "Moon Glare (Night)",
        tooltip: "Multiplier for the moon glare color at night.",
        default: 0.50,
    },
    // DALC (4)
    ChannelDef {
        channel: Channel::AmbientSides,
        name: "ambient-sides",
        group: SettingsGroup::Dalc,
        key: "sides",
        label: "Directional Ambient Sides (Night)",
        tooltip: "Multiplier for the +X, -X, +Y and -Y directional ambient colors at night.",
        default: 0.50,
    },
    ChannelDef {
        channel: Channel::AmbientDown,
        name: "ambient-down",
        group: SettingsGroup::Dalc,
        key: "down",
        label: "Directional Ambient Down (Night)",
        tooltip: "Multiplier for the Z- (from below) directional ambient color at night.",
        default: 0.50,
    },
    ChannelDef {
        channel: Channel::AmbientUp,
        name: "ambient-up",
        group: SettingsGroup::Dalc,
        key: "up",
        label: "Directional Ambient Up (Night)",
        tooltip: "Multiplier for the Z+ (from above) directional ambient color at night.",
        default: 0.50,
    },
    ChannelDef {
        channel: Channel::AmbientSpecular,
        name: "ambient-specular",
        group: SettingsGroup::Dalc,
        key: "specular",
        label: "Directional Ambient Specular (Night)",
        tooltip: "Multiplier for the directional ambient specular color at night.",
        default: 0.50,
    },
    // HNAM (1)
    ChannelDef {
        channel: Channel::VolumetricLighting,
        name: "volumetric-lighting",
        group: SettingsGroup::Hnam,
        key: "night",
        label: "Volumetric Lighting (Night)",
        tooltip: "Multiplier for the color of the night volumetric lighting record. Shared records are scaled once.",
        default: 0.10,
    },
];

/// Channels of a given group, in registry order
pub fn channels_in_group(group: SettingsGroup) -> impl Iterator<Item = &'static ChannelDef> {
    CHANNEL_REGISTRY.iter().filter(move |def| def.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_discriminants() {
        assert_eq!(CHANNEL_REGISTRY.len(), CHANNEL_COUNT);
        for (index, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(CHANNEL_REGISTRY[index].channel, *channel);
            assert_eq!(channel.def().channel, *channel);
        }
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(channels_in_group(SettingsGroup::Pnam).count(), 1);
        assert_eq!(channels_in_group(SettingsGroup::Nam0).count(), 11);
        assert_eq!(channels_in_group(SettingsGroup::Dalc).count(), 4);
        assert_eq!(channels_in_group(SettingsGroup::Hnam).count(), 1);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Channel::from_name("moon-glare"), Some(Channel::MoonGlare));
        assert_eq!(Channel::from_name("Sky_Upper"), Some(Channel::SkyUpper));
        assert_eq!(Channel::from_name("starlight"), None);
    }

    #[test]
    fn test_documented_defaults() {
        assert!((Channel::Ambient.default_multiplier() - 0.25).abs() < f64::EPSILON);
        assert!((Channel::EffectLighting.default_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((Channel::VolumetricLighting.default_multiplier() - 0.10).abs() < f64::EPSILON);
    }
}
