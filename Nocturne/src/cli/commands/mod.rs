use clap::Subcommand;
use std::path::PathBuf;
use std::str::FromStr;

use crate::settings::{Channel, InclusionMode};

pub mod definitions;
pub mod execute;
pub mod patch;
pub mod settings;

use definitions::SettingsCommands;

/// Inclusion mode argument (`all` or `base`)
#[derive(Debug, Clone, Copy)]
pub struct InclusionArg(pub InclusionMode);

impl FromStr for InclusionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "all" | "all-records" => Ok(InclusionArg(InclusionMode::AllRecords)),
            "base" | "base-content" | "base-content-only" => {
                Ok(InclusionArg(InclusionMode::BaseContentOnly))
            }
            _ => Err(format!(
                "Invalid inclusion mode '{s}'. Valid values: all/all-records, base/base-content-only"
            )),
        }
    }
}

/// Multiplier override argument (`channel=value`, e.g. `ambient=0.3`)
#[derive(Debug, Clone, Copy)]
pub struct MultiplierArg {
    pub channel: Channel,
    pub value: f64,
}

impl FromStr for MultiplierArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected CHANNEL=VALUE, got '{s}'"))?;
        let channel = Channel::from_name(name).ok_or_else(|| {
            format!("Unknown channel '{name}'. Run `nocturne settings describe` for the list")
        })?;
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid value for {channel}: {e}"))?;
        Ok(MultiplierArg { channel, value })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dim night colors of a load order and write the override patch
    Patch {
        /// Load order JSON (winning weather and volumetric lighting records)
        load_order: PathBuf,

        /// Settings TOML file (defaults are used when omitted)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Output patch JSON
        #[arg(short, long, default_value = "nocturne-patch.json")]
        output: PathBuf,

        /// Override the settings' inclusion mode (all, base)
        #[arg(long)]
        inclusion: Option<InclusionArg>,

        /// Override a single multiplier (repeatable, e.g. --set ambient=0.3)
        #[arg(long = "set", value_name = "CHANNEL=VALUE")]
        overrides: Vec<MultiplierArg>,

        /// Patch name recorded in the output
        #[arg(long, default_value = "Nocturne.esp")]
        name: String,

        /// Run without writing the patch file
        #[arg(long)]
        dry_run: bool,
    },

    /// Settings file utilities
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}
