//! Weather processor - dims night colors of weather and volumetric lighting
//!
//! For each weather record, in the order supplied:
//! 1. cloud layer night colors (cloud-color multiplier)
//! 2. the eleven named weather night colors (one multiplier each)
//! 3. the directional ambient night block, when both baseline and override
//!    have one
//! 4. the night volumetric lighting record, once per distinct record per run
//!
//! Overrides are only requested from the [`OverrideTarget`] when a field
//! actually changes.

pub mod fields;
mod lazy;
pub mod report;

use std::collections::HashSet;

use crate::color::{Color, is_achromatic, scale_float_channel, scaled_change, to_byte_channel};
use crate::records::{FormKey, LinkCache, OverrideTarget, WeatherRecord};
use crate::settings::{Channel, Settings};

pub use fields::{AmbientDirection, ColorField, NamedColor};
pub use report::RunReport;

use lazy::LazyOverride;

/// State owned by a single run
#[derive(Default)]
struct RunState {
    /// Volumetric lighting records already considered this run
    scaled_volumetric: HashSet<FormKey>,
    color_changes: usize,
    weather_changes: usize,
}

/// Applies night multipliers to weather records
pub struct WeatherProcessor<'s> {
    settings: &'s Settings,
}

impl<'s> WeatherProcessor<'s> {
    /// Create a processor. Settings are expected to be validated already.
    #[must_use]
    pub fn new(settings: &'s Settings) -> Self {
        Self { settings }
    }

    /// Process weather records in order, writing overrides into `target`
    ///
    /// Every call starts with an empty dedup set and zeroed counters.
    pub fn run<'r, I, L, T>(&self, weathers: I, links: &L, target: &mut T) -> RunReport
    where
        I: IntoIterator<Item = &'r WeatherRecord>,
        L: LinkCache + ?Sized,
        T: OverrideTarget + ?Sized,
    {
        let mut state = RunState::default();
        let mut processed = 0usize;

        tracing::info!("Dimming night colors");
        for weather in weathers {
            processed += 1;
            let fields_changed = self.scale_weather_fields(weather, &mut *target, &mut state);
            let volumetric_changed = self.scale_volumetric(weather, links, &mut *target, &mut state);

            if fields_changed || volumetric_changed {
                state.weather_changes += 1;
            }
        }

        let report = RunReport {
            weather_changes: state.weather_changes,
            color_changes: state.color_changes,
        };
        tracing::info!(
            "Processed {} weathers: {} changed, {} color fields adjusted, {} volumetric lighting records considered",
            processed,
            report.weather_changes,
            report.color_changes,
            state.scaled_volumetric.len()
        );
        report
    }

    /// Steps 1-3: cloud layers, named colors, directional ambient
    fn scale_weather_fields<T>(
        &self,
        weather: &WeatherRecord,
        target: &mut T,
        state: &mut RunState,
    ) -> bool
    where
        T: OverrideTarget + ?Sized,
    {
        let mut destination = LazyOverride::new(target, weather);
        let mut changed = false;

        for field in ColorField::for_record(weather) {
            changed |= self.scale_field(field, weather, &mut destination, state);
        }

        if !changed && destination.is_created() {
            tracing::debug!(
                "{}: override acquired without any color write",
                weather.display_name()
            );
        }
        changed
    }

    fn scale_field<T>(
        &self,
        field: ColorField,
        weather: &WeatherRecord,
        destination: &mut LazyOverride<'_, T>,
        state: &mut RunState,
    ) -> bool
    where
        T: OverrideTarget + ?Sized,
    {
        let multiplier = self.settings.multiplier(field.channel());
        let Some(scaled) = scaled_change(field.baseline(weather), multiplier) else {
            tracing::trace!("{}: {field} unchanged", weather.display_name());
            return false;
        };

        // Look before acquiring so no-op fields never create an override
        let Some(current) = field.current(destination.peek()) else {
            tracing::debug!(
                "{}: {field} has no destination on the override",
                weather.display_name()
            );
            return false;
        };
        if current == Some(scaled) {
            return false;
        }

        let Some(slot) = destination.get().and_then(|record| field.slot_mut(record)) else {
            tracing::debug!(
                "{}: {field} has no destination on the override",
                weather.display_name()
            );
            return false;
        };

        tracing::debug!(
            "{}: {field} {} -> {scaled}",
            weather.display_name(),
            current.map_or_else(|| "(empty)".to_string(), |c| c.to_string())
        );
        *slot = Some(scaled);
        state.color_changes += 1;
        true
    }

    /// Step 4: the night volumetric lighting record, deduplicated per run
    fn scale_volumetric<L, T>(
        &self,
        weather: &WeatherRecord,
        links: &L,
        target: &mut T,
        state: &mut RunState,
    ) -> bool
    where
        L: LinkCache + ?Sized,
        T: OverrideTarget + ?Sized,
    {
        let Some(link) = weather.night_volumetric_link() else {
            return false;
        };

        if state.scaled_volumetric.contains(link) {
            tracing::trace!("{}: volumetric lighting {link} already processed", weather.display_name());
            return false;
        }

        let Some(baseline) = links.resolve_volumetric(link) else {
            tracing::debug!("{}: volumetric lighting {link} not found", weather.display_name());
            return false;
        };

        // Resolved records are never reconsidered, whatever the outcome below
        state.scaled_volumetric.insert(link.clone());

        let Some((r, g, b)) = baseline.channels() else {
            tracing::debug!("Volumetric lighting {link} has no color");
            return false;
        };

        if is_achromatic(r, g, b) {
            tracing::debug!("Volumetric lighting {link} is achromatic, skipping");
            return false;
        }

        let multiplier = self.settings.multiplier(Channel::VolumetricLighting);
        let current = Color::rgb(to_byte_channel(r), to_byte_channel(g), to_byte_channel(b));
        let scaled = Color::rgb(
            scale_float_channel(r, multiplier),
            scale_float_channel(g, multiplier),
            scale_float_channel(b, multiplier),
        );
        if scaled == current {
            return false;
        }

        tracing::debug!("Volumetric lighting {link}: {current} -> {scaled}");
        target.volumetric_override(baseline).set_byte_color(scaled);
        state.color_changes += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{
        AmbientColors, CloudLayer, DirectionalAmbientLighting, LoadOrder, PatchMod,
        VolumetricLightingLinks, VolumetricLightingRecord, WeatherColor,
    };
    use pretty_assertions::assert_eq;

    fn weather(id: u32) -> WeatherRecord {
        WeatherRecord::new(FormKey::new(id, "Skyrim.esm"))
    }

    fn with_volumetric(mut record: WeatherRecord, link: &FormKey) -> WeatherRecord {
        record.volumetric_lighting = Some(VolumetricLightingLinks {
            night: Some(link.clone()),
            ..VolumetricLightingLinks::default()
        });
        record
    }

    fn run(settings: &Settings, load_order: &LoadOrder) -> (RunReport, PatchMod) {
        let mut patch = PatchMod::new("Test.esp");
        let report = WeatherProcessor::new(settings).run(&load_order.weathers, load_order, &mut patch);
        (report, patch)
    }

    fn night_ambient(patch: &PatchMod, key: &FormKey) -> Option<Color> {
        patch.weathers.get(key)?.colors.ambient.as_ref()?.night
    }

    #[test]
    fn test_ambient_scenario() {
        let mut record = weather(1);
        record.colors.ambient = Some(WeatherColor::night(Color::rgb(200, 200, 200)));
        let key = record.form_key.clone();
        let mut load_order = LoadOrder::new();
        load_order.push_weather(record);

        let (report, patch) = run(&Settings::default(), &load_order);

        assert_eq!(night_ambient(&patch, &key), Some(Color::rgb(50, 50, 50)));
        assert_eq!(
            report,
            RunReport {
                weather_changes: 1,
                color_changes: 1
            }
        );
    }

    #[test]
    fn test_pure_white_sky_is_not_overridden() {
        let mut record = weather(1);
        record.colors.sky_upper = Some(WeatherColor::night(Color::WHITE));
        record.colors.fog_far = Some(WeatherColor::night(Color::BLACK));
        let mut load_order = LoadOrder::new();
        load_order.push_weather(record);

        let (report, patch) = run(&Settings::default(), &load_order);

        assert_eq!(report, RunReport::default());
        assert!(patch.is_empty(), "no override should be created");
    }

    #[test]
    fn test_only_night_values_change() {
        let mut record = weather(1);
        record.colors.horizon = Some(WeatherColor {
            sunrise: Some(Color::rgb(90, 90, 90)),
            day: Some(Color::rgb(100, 100, 100)),
            sunset: Some(Color::rgb(110, 110, 110)),
            night: Some(Color::rgb(120, 60, 30)),
        });
        let key = record.form_key.clone();
        let mut load_order = LoadOrder::new();
        load_order.push_weather(record);

        let mut settings = Settings::default();
        settings.nam0.horizon = 0.5;
        let (_, patch) = run(&settings, &load_order);

        let horizon = patch.weathers[&key].colors.horizon.clone().unwrap();
        assert_eq!(horizon.night, Some(Color::rgb(60, 30, 15)));
        assert_eq!(horizon.day, Some(Color::rgb(100, 100, 100)));
        assert_eq!(horizon.sunrise, Some(Color::rgb(90, 90, 90)));
    }

    #[test]
    fn test_unit_multiplier_is_noop() {
        let mut record = weather(1);
        record.colors.effect_lighting = Some(WeatherColor::night(Color::rgb(80, 90, 100)));
        let mut load_order = LoadOrder::new();
        load_order.push_weather(record);

        // effect-lighting defaults to 1.0
        let (report, patch) = run(&Settings::default(), &load_order);
        assert_eq!(report.color_changes, 0);
        assert!(patch.is_empty());
    }

    #[test]
    fn test_cloud_layers() {
        let mut record = weather(1);
        record.clouds = vec![
            CloudLayer {
                colors: Some(WeatherColor::night(Color::rgb(100, 100, 100))),
                ..CloudLayer::default()
            },
            CloudLayer::default(),
            CloudLayer {
                colors: Some(WeatherColor::night(Color::rgb(40, 80, 120))),
                ..CloudLayer::default()
            },
        ];
        let key = record.form_key.clone();
        let mut load_order = LoadOrder::new();
        load_order.push_weather(record);

        let (report, patch) = run(&Settings::default(), &load_order);

        let clouds = &patch.weathers[&key].clouds;
        assert_eq!(clouds[0].colors.as_ref().unwrap().night, Some(Color::rgb(50, 50, 50)));
        assert!(clouds[1].colors.is_none());
        assert_eq!(clouds[2].colors.as_ref().unwrap().night, Some(Color::rgb(20, 40, 60)));
        assert_eq!(report.color_changes, 2);
    }

    /// Target whose overrides carry fewer cloud layers and no DALC night block
    struct ShortTarget(PatchMod);

    impl OverrideTarget for ShortTarget {
        fn weather_override(&mut self, baseline: &WeatherRecord) -> &mut WeatherRecord {
            self.0
                .weathers
                .entry(baseline.form_key.clone())
                .or_insert_with(|| {
                    let mut copy = baseline.clone();
                    copy.clouds.truncate(1);
                    if let Some(dalc) = copy.directional_ambient.as_mut() {
                        dalc.night = None;
                    }
                    copy
                })
        }

        fn volumetric_override(
            &mut self,
            baseline: &VolumetricLightingRecord,
        ) -> &mut VolumetricLightingRecord {
            self.0.volumetric_override(baseline)
        }
    }

    #[test]
    fn test_mismatched_override_structure_is_skipped() {
        let layer = CloudLayer {
            colors: Some(WeatherColor::night(Color::rgb(100, 100, 100))),
            ..CloudLayer::default()
        };
        let mut record = weather(1);
        record.clouds = vec![layer.clone(), layer];
        record.directional_ambient = Some(DirectionalAmbientLighting {
            night: Some(AmbientColors {
                x_plus: Some(Color::rgb(100, 100, 100)),
                specular: Some(Color::rgb(100, 100, 100)),
                ..AmbientColors::default()
            }),
            ..DirectionalAmbientLighting::default()
        });
        let key = record.form_key.clone();

        let mut target = ShortTarget(PatchMod::new("Test.esp"));
        let report = WeatherProcessor::new(&Settings::default()).run(
            [&record],
            &LoadOrder::new(),
            &mut target,
        );

        // Only the first cloud layer exists on both sides
        assert_eq!(report.color_changes, 1);
        assert_eq!(report.weather_changes, 1);
        let written = &target.0.weathers[&key];
        assert_eq!(written.clouds.len(), 1);
        assert!(written.directional_ambient.as_ref().unwrap().night.is_none());
    }

    #[test]
    fn test_directional_ambient_multipliers() {
        let gray = Some(Color::rgb(200, 200, 200));
        let mut record = weather(1);
        record.directional_ambient = Some(DirectionalAmbientLighting {
            night: Some(AmbientColors {
                x_plus: gray,
                x_minus: gray,
                y_plus: gray,
                y_minus: gray,
                z_plus: gray,
                z_minus: gray,
                specular: gray,
                fresnel_power: Some(1.0),
            }),
            day: Some(AmbientColors {
                x_plus: gray,
                ..AmbientColors::default()
            }),
            ..DirectionalAmbientLighting::default()
        });
        let key = record.form_key.clone();
        let mut load_order = LoadOrder::new();
        load_order.push_weather(record);

        let mut settings = Settings::default();
        settings.dalc.sides = 0.5;
        settings.dalc.down = 0.25;
        settings.dalc.up = 0.1;
        settings.dalc.specular = 1.0;
        let (report, patch) = run(&settings, &load_order);

        let dalc = patch.weathers[&key].directional_ambient.clone().unwrap();
        let night = dalc.night.unwrap();
        assert_eq!(night.x_plus, Some(Color::rgb(100, 100, 100)));
        assert_eq!(night.y_minus, Some(Color::rgb(100, 100, 100)));
        assert_eq!(night.z_minus, Some(Color::rgb(50, 50, 50)));
        assert_eq!(night.z_plus, Some(Color::rgb(20, 20, 20)));
        assert_eq!(night.specular, gray);
        assert_eq!(dalc.day.unwrap().x_plus, gray);
        assert_eq!(report.color_changes, 6);
    }

    #[test]
    fn test_missing_night_ambient_block_is_skipped() {
        let mut record = weather(1);
        record.directional_ambient = Some(DirectionalAmbientLighting {
            day: Some(AmbientColors {
                x_plus: Some(Color::rgb(200, 200, 200)),
                ..AmbientColors::default()
            }),
            ..DirectionalAmbientLighting::default()
        });
        let mut load_order = LoadOrder::new();
        load_order.push_weather(record);

        let (report, patch) = run(&Settings::default(), &load_order);
        assert_eq!(report, RunReport::default());
        assert!(patch.is_empty());
    }

    #[test]
    fn test_shared_volumetric_is_scaled_once() {
        let link = FormKey::new(0xD4886, "Skyrim.esm");
        let mut load_order = LoadOrder::new();
        load_order.insert_volumetric(VolumetricLightingRecord::with_color(
            link.clone(),
            120.0,
            140.0,
            200.0,
        ));
        load_order.push_weather(with_volumetric(weather(1), &link));
        load_order.push_weather(with_volumetric(weather(2), &link));

        let (report, patch) = run(&Settings::default(), &load_order);

        assert_eq!(
            report,
            RunReport {
                weather_changes: 1,
                color_changes: 1
            }
        );
        assert_eq!(patch.volumetric_lightings.len(), 1);
        assert_eq!(
            patch.volumetric_lightings[&link].channels(),
            Some((12.0, 14.0, 20.0))
        );
        // Weathers themselves had nothing to dim
        assert!(patch.weathers.is_empty());
    }

    #[test]
    fn test_fractional_volumetric_channels_round_once() {
        let link = FormKey::new(0xD4887, "Skyrim.esm");
        let mut load_order = LoadOrder::new();
        load_order.insert_volumetric(VolumetricLightingRecord::with_color(
            link.clone(),
            124.6,
            34.5,
            200.0,
        ));
        load_order.push_weather(with_volumetric(weather(1), &link));

        let (report, patch) = run(&Settings::default(), &load_order);

        assert_eq!(report.color_changes, 1);
        assert_eq!(
            patch.volumetric_lightings[&link].channels(),
            Some((12.0, 3.0, 20.0))
        );
    }

    #[test]
    fn test_achromatic_volumetric_is_skipped() {
        let black = FormKey::new(0x10, "Skyrim.esm");
        let white = FormKey::new(0x11, "Skyrim.esm");
        let mut load_order = LoadOrder::new();
        load_order.insert_volumetric(VolumetricLightingRecord::with_color(black.clone(), 0.0, 0.005, 0.0));
        load_order.insert_volumetric(VolumetricLightingRecord::with_color(
            white.clone(),
            255.0,
            254.995,
            255.0,
        ));
        load_order.push_weather(with_volumetric(weather(1), &black));
        load_order.push_weather(with_volumetric(weather(2), &white));

        let mut settings = Settings::default();
        settings.hnam.night = 0.0;
        let (report, patch) = run(&settings, &load_order);

        assert_eq!(report, RunReport::default());
        assert!(patch.volumetric_lightings.is_empty());
    }

    #[test]
    fn test_unresolved_or_incomplete_volumetric_is_skipped() {
        let missing = FormKey::new(0x20, "Skyrim.esm");
        let partial = FormKey::new(0x21, "Skyrim.esm");
        let mut incomplete = VolumetricLightingRecord::with_color(partial.clone(), 100.0, 100.0, 100.0);
        incomplete.color_b = None;

        let mut load_order = LoadOrder::new();
        load_order.insert_volumetric(incomplete);
        load_order.push_weather(with_volumetric(weather(1), &missing));
        load_order.push_weather(with_volumetric(weather(2), &partial));

        let (report, patch) = run(&Settings::default(), &load_order);
        assert_eq!(report, RunReport::default());
        assert!(patch.is_empty());
    }

    #[test]
    fn test_weather_changed_counts_own_writes() {
        let link = FormKey::new(0xD4886, "Skyrim.esm");
        let mut load_order = LoadOrder::new();
        load_order.insert_volumetric(VolumetricLightingRecord::with_color(link.clone(), 100.0, 50.0, 25.0));

        // First weather owns only the volumetric write, second only a field write
        load_order.push_weather(with_volumetric(weather(1), &link));
        let mut second = with_volumetric(weather(2), &link);
        second.colors.sunlight = Some(WeatherColor::night(Color::rgb(80, 80, 80)));
        load_order.push_weather(second);
        // Third shares the processed link and has nothing else
        load_order.push_weather(with_volumetric(weather(3), &link));

        let (report, _) = run(&Settings::default(), &load_order);
        assert_eq!(
            report,
            RunReport {
                weather_changes: 2,
                color_changes: 2
            }
        );
    }

    #[test]
    fn test_runs_are_deterministic() {
        let link = FormKey::new(0x30, "Skyrim.esm");
        let mut record = with_volumetric(weather(1), &link);
        record.colors.fog_near = Some(WeatherColor::night(Color::rgba(33, 66, 99, 128)));
        record.colors.moon_glare = Some(WeatherColor::night(Color::rgb(255, 200, 150)));
        let mut load_order = LoadOrder::new();
        load_order.insert_volumetric(VolumetricLightingRecord::with_color(link, 77.7, 12.2, 3.5));
        load_order.push_weather(record);

        let settings = Settings::default();
        let (first_report, first_patch) = run(&settings, &load_order);
        let (second_report, second_patch) = run(&settings, &load_order);

        assert_eq!(first_report, second_report);
        assert_eq!(first_patch.weathers, second_patch.weathers);
        assert_eq!(first_patch.volumetric_lightings, second_patch.volumetric_lightings);
    }

    #[test]
    fn test_same_processor_resets_dedup_between_runs() {
        let link = FormKey::new(0x40, "Skyrim.esm");
        let mut load_order = LoadOrder::new();
        load_order.insert_volumetric(VolumetricLightingRecord::with_color(link.clone(), 100.0, 100.0, 50.0));
        load_order.push_weather(with_volumetric(weather(1), &link));

        let settings = Settings::default();
        let processor = WeatherProcessor::new(&settings);
        for _ in 0..2 {
            let mut patch = PatchMod::new("Test.esp");
            let report = processor.run(&load_order.weathers, &load_order, &mut patch);
            assert_eq!(report.color_changes, 1);
        }
    }

    #[test]
    fn test_existing_override_value_is_not_rewritten() {
        let mut record = weather(1);
        record.colors.ambient = Some(WeatherColor::night(Color::rgb(200, 200, 200)));

        // Destination already holds the scaled value from an earlier pass
        let mut patch = PatchMod::new("Test.esp");
        patch.weather_override(&record).colors.ambient =
            Some(WeatherColor::night(Color::rgb(50, 50, 50)));

        let report = WeatherProcessor::new(&Settings::default()).run(
            [&record],
            &LoadOrder::new(),
            &mut patch,
        );
        assert_eq!(report, RunReport::default());
    }

    /// Patch wrapper counting override requests
    struct CountingPatch {
        patch: PatchMod,
        weather_calls: usize,
    }

    impl OverrideTarget for CountingPatch {
        fn existing_weather_override(&self, key: &FormKey) -> Option<&WeatherRecord> {
            self.patch.existing_weather_override(key)
        }

        fn weather_override(&mut self, baseline: &WeatherRecord) -> &mut WeatherRecord {
            self.weather_calls += 1;
            self.patch.weather_override(baseline)
        }

        fn volumetric_override(
            &mut self,
            baseline: &VolumetricLightingRecord,
        ) -> &mut VolumetricLightingRecord {
            self.patch.volumetric_override(baseline)
        }
    }

    #[test]
    fn test_rerun_over_populated_patch_requests_no_override() {
        let mut record = weather(1);
        record.colors.ambient = Some(WeatherColor::night(Color::rgb(200, 200, 200)));
        record.colors.fog_far = Some(WeatherColor::night(Color::rgb(90, 60, 30)));
        let settings = Settings::default();

        let mut target = CountingPatch {
            patch: PatchMod::new("Test.esp"),
            weather_calls: 0,
        };
        let first = WeatherProcessor::new(&settings).run([&record], &LoadOrder::new(), &mut target);
        assert_eq!(first.color_changes, 2);
        assert_eq!(target.weather_calls, 1);

        target.weather_calls = 0;
        let second = WeatherProcessor::new(&settings).run([&record], &LoadOrder::new(), &mut target);
        assert_eq!(second, RunReport::default());
        assert_eq!(target.weather_calls, 0);
    }

    #[test]
    fn test_missing_destination_structure_creates_no_override() {
        let mut record = weather(1);
        record.colors.ambient = Some(WeatherColor::night(Color::rgb(200, 200, 200)));

        // Existing override dropped the ambient color block
        let mut existing = record.clone();
        existing.colors.ambient = None;
        let mut patch = PatchMod::new("Test.esp");
        patch.weathers.insert(existing.form_key.clone(), existing);

        let mut target = CountingPatch {
            patch,
            weather_calls: 0,
        };
        let report = WeatherProcessor::new(&Settings::default()).run(
            [&record],
            &LoadOrder::new(),
            &mut target,
        );

        assert_eq!(report, RunReport::default());
        assert_eq!(target.weather_calls, 0);
        assert!(target.patch.weathers[&record.form_key].colors.ambient.is_none());
    }
}
