//! Processor configuration types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use transito_core::ProcessorWithParams;
use transito_dynamics::ProcessorRegistry;

use crate::error::ConfigError;
use crate::validation::ProcessorValidator;

/// Configuration for a single processor in a preset.
///
/// A processor has a type identifier and optional parameters. Prefixing the
/// type with `!` (e.g., `!compressor`) marks it bypassed.
///
/// # Example
///
/// ```rust
/// use transito_config::ProcessorConfig;
///
/// let config = ProcessorConfig::new("compressor")
///     .with_param("threshold", "-24dB")
///     .with_param("attack_time", "5ms");
///
/// assert_eq!(config.processor_type, "compressor");
/// assert_eq!(config.parse_param("attack_time"), Some(0.005));
/// assert!(!config.bypassed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessorConfig {
    /// Processor type id (`"compressor"`, `"transient_splitter"`).
    #[serde(rename = "type")]
    pub processor_type: String,

    /// Whether the processor is bypassed.
    #[serde(default)]
    pub bypassed: bool,

    /// Parameters keyed by parameter key or display name.
    /// Values are strings so units can be written out ("20ms", "-18dB").
    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl ProcessorConfig {
    /// Create a processor configuration.
    ///
    /// If the type starts with `!`, the processor is marked bypassed.
    pub fn new(processor_type: impl Into<String>) -> Self {
        let type_str = processor_type.into();
        let (processor_type, bypassed) = match type_str.strip_prefix('!') {
            Some(stripped) => (stripped.to_string(), true),
            None => (type_str, false),
        };

        Self {
            processor_type,
            bypassed,
            params: HashMap::new(),
        }
    }

    /// Add a parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set whether the processor is bypassed.
    pub fn with_bypass(mut self, bypassed: bool) -> Self {
        self.bypassed = bypassed;
        self
    }

    /// Raw parameter value.
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Set a parameter value.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Parse a parameter value with [`parse_param_value`].
    pub fn parse_param(&self, key: &str) -> Option<f32> {
        parse_param_value(self.params.get(key)?)
    }

    /// Type id for display, with `!` prefix if bypassed.
    pub fn display_type(&self) -> String {
        if self.bypassed {
            format!("!{}", self.processor_type)
        } else {
            self.processor_type.clone()
        }
    }

    /// Create the processor and apply every parameter.
    ///
    /// Parameters are validated against their descriptor ranges first, so
    /// the processor only ever sees in-range values.
    pub fn build(&self) -> Result<Box<dyn ProcessorWithParams + Send>, ConfigError> {
        let mut processor = ProcessorRegistry::new()
            .create(&self.processor_type)
            .ok_or_else(|| ConfigError::UnknownProcessor(self.processor_type.clone()))?;

        let validator = ProcessorValidator::new();
        let mut keys: Vec<&String> = self.params.keys().collect();
        keys.sort();
        for key in keys {
            let (index, value) =
                validator.validate_param(&self.processor_type, key, &self.params[key])?;
            processor.processor_set_param(index, value);
        }

        tracing::debug!(
            processor = %self.processor_type,
            params = self.params.len(),
            bypassed = self.bypassed,
            "built processor"
        );
        Ok(processor)
    }
}

/// Parse a parameter value string into an f32.
///
/// Supported formats:
/// - Plain numbers: "0.5", "4", "-18"
/// - Percentages: "50%" (divided by 100)
/// - Decibels: "-18dB", "+3 dB" (kept in dB; level parameters are in dB)
/// - Time in ms: "20ms" (converted to seconds)
/// - Time in s: "1.5s"
/// - Switches: "on"/"off", "true"/"false" (1.0 / 0.0)
/// - Compression type: "upward" / "expander" (0.0 / 1.0)
///
/// ```rust
/// use transito_config::parse_param_value;
///
/// assert_eq!(parse_param_value("-18dB"), Some(-18.0));
/// assert_eq!(parse_param_value("250ms"), Some(0.25));
/// assert_eq!(parse_param_value("Expander"), Some(1.0));
/// assert_eq!(parse_param_value("loud"), None);
/// ```
pub fn parse_param_value(value: &str) -> Option<f32> {
    let value = value.trim();

    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "expander" => return Some(1.0),
        "off" | "false" | "upward" => return Some(0.0),
        _ => {}
    }

    if let Some(pct) = value.strip_suffix('%') {
        return pct.trim().parse::<f32>().ok().map(|v| v / 100.0);
    }

    if let Some(db) = value
        .strip_suffix("dB")
        .or_else(|| value.strip_suffix("db"))
    {
        return db.trim().parse::<f32>().ok();
    }

    if let Some(ms) = value.strip_suffix("ms") {
        return ms.trim().parse::<f32>().ok().map(|v| v / 1000.0);
    }

    if let Some(s) = value.strip_suffix('s') {
        return s.trim().parse::<f32>().ok();
    }

    value.parse::<f32>().ok()
}
