//! Patch command: run the processor over a load order and write the patch

use std::path::Path;

use anyhow::Context;

use super::MultiplierArg;
use crate::processor::{RunReport, WeatherProcessor};
use crate::records::{LoadOrder, PatchMod};
use crate::settings::{InclusionMode, Settings};

/// Borrowed arguments of `nocturne patch`
pub struct PatchArgs<'a> {
    pub load_order: &'a Path,
    pub settings: Option<&'a Path>,
    pub output: &'a Path,
    pub inclusion: Option<InclusionMode>,
    pub overrides: &'a [MultiplierArg],
    pub name: &'a str,
    pub dry_run: bool,
}

/// Build the effective settings: file (or defaults), then command-line overrides
///
/// # Errors
/// Returns an error if the settings file cannot be loaded or the result is invalid.
pub fn resolve_settings(args: &PatchArgs<'_>) -> anyhow::Result<Settings> {
    let mut settings = match args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let Some(mode) = args.inclusion {
        settings.inclusion = mode;
    }
    for arg in args.overrides {
        *settings.multiplier_mut(arg.channel) = arg.value;
    }

    settings.validate()?;
    Ok(settings)
}

/// Execute `nocturne patch`
///
/// # Errors
/// Returns an error on invalid settings or when the load order or patch file
/// cannot be read or written.
pub fn execute(args: &PatchArgs<'_>) -> anyhow::Result<RunReport> {
    let settings = resolve_settings(args)?;

    let load_order = LoadOrder::load(args.load_order)
        .with_context(|| format!("Failed to load {}", args.load_order.display()))?;

    tracing::info!(
        "Patching with inclusion mode {}",
        settings.inclusion.as_str()
    );

    let mut patch = PatchMod::new(args.name);
    let report = WeatherProcessor::new(&settings).run(
        load_order.weathers(settings.inclusion),
        &load_order,
        &mut patch,
    );

    if args.dry_run {
        println!("Dry run: {} override(s) not written", patch.record_count());
    } else {
        patch
            .save(args.output)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
        println!(
            "Wrote {} override(s) to {}",
            patch.record_count(),
            args.output.display()
        );
    }

    println!("{report}");
    Ok(report)
}
