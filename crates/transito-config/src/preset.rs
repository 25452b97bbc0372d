//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use transito_core::ProcessorWithParams;

use crate::error::ConfigError;
use crate::processor_config::ProcessorConfig;

/// Preset file format for processor chains.
///
/// # TOML Format
///
/// ```toml
/// name = "Drum Punch"
/// description = "Sharper hits, then glue"
/// sample_rate = 48000
/// max_block_size = 512
///
/// [[processors]]
/// type = "transient_splitter"
/// [processors.params]
/// attack = "2.0"
/// attack_time = "20ms"
///
/// [[processors]]
/// type = "compressor"
/// bypassed = true
/// [processors.params]
/// threshold = "-12dB"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Largest block size the chain is prepared for (defaults to 512).
    #[serde(default = "default_max_block_size")]
    pub max_block_size: usize,

    /// Processors in chain order.
    #[serde(default)]
    pub processors: Vec<ProcessorConfig>,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_max_block_size() -> usize {
    512
}

impl Preset {
    /// Create an empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            max_block_size: default_max_block_size(),
            processors: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the block size hint.
    pub fn with_max_block_size(mut self, max_block_size: usize) -> Self {
        self.max_block_size = max_block_size;
        self
    }

    /// Append a processor.
    pub fn with_processor(mut self, processor: ProcessorConfig) -> Self {
        self.processors.push(processor);
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "loaded preset");
        Ok(preset)
    }

    /// Parse a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating the parent directory.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved preset");
        Ok(())
    }

    /// Serialize the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Number of processors.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether the preset has no processors.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Processor configuration by index.
    pub fn get(&self, index: usize) -> Option<&ProcessorConfig> {
        self.processors.get(index)
    }

    /// Iterate over processor configurations.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessorConfig> {
        self.processors.iter()
    }

    /// Processor types, `!`-prefixed when bypassed.
    pub fn processor_types(&self) -> Vec<String> {
        self.processors
            .iter()
            .map(ProcessorConfig::display_type)
            .collect()
    }

    /// Build every processor in chain order, paired with its bypass flag.
    pub fn build_processors(
        &self,
    ) -> Result<Vec<(Box<dyn ProcessorWithParams + Send>, bool)>, ConfigError> {
        self.processors
            .iter()
            .map(|config| Ok((config.build()?, config.bypassed)))
            .collect()
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
