//! Factory presets bundled with the library.
//!
//! Built-in processor chains that are always available without external
//! files. They double as examples of the preset format.

use std::path::Path;

use crate::{ConfigError, Preset};

/// Factory preset identifiers.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "gentle_glue",
    "vocal_leveler",
    "drum_punch",
    "soften_transients",
    "downward_expander",
];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("gentle_glue", GENTLE_GLUE_PRESET),
    ("vocal_leveler", VOCAL_LEVELER_PRESET),
    ("drum_punch", DRUM_PUNCH_PRESET),
    ("soften_transients", SOFTEN_TRANSIENTS_PRESET),
    ("downward_expander", DOWNWARD_EXPANDER_PRESET),
];

/// Both processors at their defaults, bypassed.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Both processors at their defaults, bypassed"

[[processors]]
type = "transient_splitter"
bypassed = true

[[processors]]
type = "compressor"
bypassed = true
"#;

/// Low-ratio, wide-knee bus compression.
const GENTLE_GLUE_PRESET: &str = r#"
name = "Gentle Glue"
description = "Low ratio, wide knee, slow attack bus compression"

[[processors]]
type = "compressor"
[processors.params]
threshold = "-20dB"
ratio = "2"
knee = "10dB"
make_up_gain = "2dB"
attack_time = "30ms"
release_time = "200ms"
"#;

/// Vocal levelling with automatic make-up gain.
const VOCAL_LEVELER_PRESET: &str = r#"
name = "Vocal Leveler"
description = "Fast compression with automatic make-up gain"

[[processors]]
type = "compressor"
[processors.params]
threshold = "-24dB"
ratio = "3"
knee = "6dB"
attack_time = "5ms"
release_time = "150ms"
auto_make_up_gain = "on"
"#;

/// Transient boost followed by compression.
const DRUM_PUNCH_PRESET: &str = r#"
name = "Drum Punch"
description = "Boosted attacks, then fast compression"

[[processors]]
type = "transient_splitter"
[processors.params]
attack = "2.0"
sustain = "0.8"
attack_time = "20ms"
release_time = "150ms"

[[processors]]
type = "compressor"
[processors.params]
threshold = "-12dB"
ratio = "4"
knee = "4dB"
attack_time = "10ms"
release_time = "80ms"
"#;

/// Tamed attacks for harsh sources.
const SOFTEN_TRANSIENTS_PRESET: &str = r#"
name = "Soften Transients"
description = "Pulls back attacks, leaves the sustain untouched"

[[processors]]
type = "transient_splitter"
[processors.params]
attack = "0.4"
sustain = "1.0"
attack_time = "40ms"
release_time = "200ms"
release_time_ratio = "50%"
"#;

/// Expander that pushes down low-level noise.
const DOWNWARD_EXPANDER_PRESET: &str = r#"
name = "Downward Expander"
description = "Attenuates material below the threshold"

[[processors]]
type = "compressor"
[processors.params]
compression_type = "expander"
threshold = "-45dB"
ratio = "2"
knee = "6dB"
range = "30dB"
attack_time = "1ms"
release_time = "100ms"
"#;

/// All factory presets, in listing order.
///
/// ```rust
/// use transito_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("{}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Factory preset by identifier or display name, case-insensitive.
///
/// ```rust
/// use transito_config::get_factory_preset;
///
/// let preset = get_factory_preset("drum_punch").unwrap();
/// assert_eq!(preset.name, "Drum Punch");
/// assert!(get_factory_preset("Drum Punch").is_some());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Whether `name` matches a factory preset identifier or display name.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

/// Resolve a preset by factory name or by path to a TOML file.
///
/// Factory presets win over files with the same name.
///
/// ```rust
/// use transito_config::{ConfigError, find_preset};
///
/// assert_eq!(find_preset("gentle_glue").unwrap().name, "Gentle Glue");
/// assert!(matches!(find_preset("no_such_preset"), Err(ConfigError::PresetNotFound(_))));
/// ```
pub fn find_preset(name: &str) -> Result<Preset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    let path = Path::new(name);
    if path.is_file() {
        return Preset::load(path);
    }

    Err(ConfigError::PresetNotFound(name.to_string()))
}
