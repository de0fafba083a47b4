//! Subcommand enum definitions for CLI

use clap::Subcommand;
use std::path::PathBuf;

/// Settings file commands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Write a settings file with every default
    Init {
        /// Destination file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Load and validate a settings file
    Check {
        /// Settings TOML file
        path: PathBuf,
    },

    /// List every multiplier with its label, default and tooltip
    Describe,
}
