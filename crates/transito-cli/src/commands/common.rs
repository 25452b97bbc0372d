//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use transito_config::{Preset, find_preset};

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!(
            "Invalid parameter format: '{}' (expected key=value)",
            s
        )),
    }
}

/// Load a preset by factory name or file path.
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    find_preset(name).context("Use 'transito presets list' to see available presets")
}

/// Root-mean-square level.
pub fn rms(samples: &[f32]) -> f32 {
    transito_core::rms(samples)
}

/// Largest absolute sample.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

/// Level in dB for display, floored at -120.
pub fn display_db(linear: f32) -> f32 {
    transito_core::linear_to_db(linear).max(-120.0)
}
