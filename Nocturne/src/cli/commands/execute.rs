//! Command execution implementations

use super::definitions::SettingsCommands;
use super::{Commands, patch, settings};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Patch {
                load_order,
                settings,
                output,
                inclusion,
                overrides,
                name,
                dry_run,
            } => patch::execute(&patch::PatchArgs {
                load_order,
                settings: settings.as_deref(),
                output,
                inclusion: inclusion.map(|arg| arg.0),
                overrides,
                name,
                dry_run: *dry_run,
            })
            .map(|_| ()),
            Commands::Settings { command } => command.execute(),
        }
    }
}

impl SettingsCommands {
    /// Execute the selected settings command.
    ///
    /// # Errors
    /// Returns an error if the settings file cannot be read or written.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            SettingsCommands::Init { output, force } => settings::init(output.as_deref(), *force),
            SettingsCommands::Check { path } => settings::check(path),
            SettingsCommands::Describe => {
                settings::describe();
                Ok(())
            }
        }
    }
}
