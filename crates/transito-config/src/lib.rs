//! Presets and parameter handling for transito processor chains.
//!
//! # Features
//!
//! - **Preset System**: Load and save processor chains as TOML
//! - **Parameter Parsing**: Values with units ("-18dB", "20ms", "50%", "on")
//! - **Validation**: Processor types and parameter ranges, taken from each
//!   processor's own descriptors
//! - **Factory Presets**: Built-in chains for common jobs
//!
//! # Example
//!
//! ```rust,no_run
//! use transito_config::{Preset, ProcessorConfig, validate_preset};
//!
//! let preset = Preset::new("Punchy Drums")
//!     .with_processor(
//!         ProcessorConfig::new("transient_splitter")
//!             .with_param("attack", "1.8")
//!             .with_param("attack_time", "20ms"),
//!     )
//!     .with_processor(ProcessorConfig::new("compressor").with_param("threshold", "-18dB"));
//!
//! validate_preset(&preset).unwrap();
//! preset.save("punchy_drums.toml").unwrap();
//!
//! let loaded = Preset::load("punchy_drums.toml").unwrap();
//! let processors = loaded.build_processors().unwrap();
//! ```

mod error;
mod preset;
mod processor_config;

/// Processor and preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, find_preset,
    get_factory_preset, is_factory_preset,
};
pub use preset::Preset;
pub use processor_config::{ProcessorConfig, parse_param_value};
pub use validation::{
    ProcessorValidator, ValidationError, ValidationResult, validate_preset, validate_processor,
};

/// Re-export of the processor registry used to resolve processor types.
pub use transito_dynamics::{ProcessorDescriptor, ProcessorKind, ProcessorRegistry};
