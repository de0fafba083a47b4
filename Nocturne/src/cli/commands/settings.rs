//! Settings commands: init, check, describe

use std::path::Path;

use crate::settings::{Settings, SettingsGroup, channels_in_group};

const GROUPS: [SettingsGroup; 4] = [
    SettingsGroup::Pnam,
    SettingsGroup::Nam0,
    SettingsGroup::Dalc,
    SettingsGroup::Hnam,
];

/// Write the default settings to `output`, or stdout when no path is given
///
/// # Errors
/// Returns an error if the file exists (without `force`) or cannot be written.
pub fn init(output: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let settings = Settings::default();

    let Some(path) = output else {
        print!("{}", settings.to_toml_string()?);
        return Ok(());
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    settings.save(path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

/// Load and validate a settings file, exiting with status 1 when it is invalid
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn check(path: &Path) -> anyhow::Result<()> {
    match Settings::load_validated(path) {
        Ok(settings) => {
            println!("✓ {} is valid", path.display());
            println!("  Inclusion: {}", settings.inclusion.as_str());
            Ok(())
        }
        Err(err) if err.is_configuration() => {
            println!("✗ {}: {err}", path.display());
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

/// Print every multiplier grouped by settings table
pub fn describe() {
    for group in GROUPS {
        println!("[{}] {}", group.table(), group);
        for def in channels_in_group(group) {
            println!("  {:<22} {:<36} default {:.2}", def.name, def.label, def.default);
            println!("      {}", def.tooltip);
        }
        println!();
    }
}
