//! Processor and preset validation.
//!
//! Parameter names and ranges come from each processor's
//! [`ParameterInfo`](transito_core::ParameterInfo) descriptors, so validation
//! always agrees with what the processor accepts.
//!
//! # Example
//!
//! ```rust
//! use transito_config::{ProcessorValidator, validate_processor};
//!
//! validate_processor("compressor").expect("compressor should exist");
//!
//! let validator = ProcessorValidator::new();
//! let (index, value) = validator
//!     .validate_param("compressor", "threshold", "-24dB")
//!     .expect("threshold should be valid");
//! assert_eq!((index, value), (0, -24.0));
//! ```

use std::collections::HashMap;
use thiserror::Error;

use transito_core::ParamDescriptor;
use transito_dynamics::{ProcessorKind, create_processor};

use crate::preset::Preset;
use crate::processor_config::{ProcessorConfig, parse_param_value};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown processor type.
    #[error("unknown processor type: {0}")]
    UnknownProcessor(String),

    /// Unknown parameter name.
    #[error("unknown parameter '{param}' for processor '{processor}'")]
    UnknownParameter {
        /// Processor type.
        processor: String,
        /// Name of the unrecognized parameter.
        param: String,
    },

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Value could not be parsed.
    #[error("invalid format for parameter '{param}': '{value}'")]
    InvalidFormat {
        /// Name of the parameter.
        param: String,
        /// The text that failed to parse.
        value: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validator holding the parameter descriptors of every processor kind.
pub struct ProcessorValidator {
    params: HashMap<ProcessorKind, Vec<ParamDescriptor>>,
}

impl Default for ProcessorValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorValidator {
    /// Create a validator, collecting descriptors from each processor kind.
    pub fn new() -> Self {
        let params = ProcessorKind::ALL
            .into_iter()
            .map(|kind| {
                let processor = create_processor(kind);
                let descriptors = (0..processor.processor_param_count())
                    .filter_map(|i| processor.processor_param_info(i))
                    .collect();
                (kind, descriptors)
            })
            .collect();
        Self { params }
    }

    /// Validate that a processor type exists.
    pub fn validate_processor(&self, processor_type: &str) -> ValidationResult<ProcessorKind> {
        ProcessorKind::from_id(processor_type)
            .ok_or_else(|| ValidationError::UnknownProcessor(processor_type.to_string()))
    }

    /// Descriptors of a processor type, in parameter-index order.
    pub fn processor_params(&self, processor_type: &str) -> ValidationResult<&[ParamDescriptor]> {
        let kind = self.validate_processor(processor_type)?;
        Ok(self.params.get(&kind).map_or(&[][..], Vec::as_slice))
    }

    /// Find a parameter index by key or display name.
    ///
    /// Matching ignores case and treats `-` and spaces as `_`.
    pub fn find_param_index(&self, processor_type: &str, param_name: &str) -> Option<usize> {
        let wanted = normalize_param_name(param_name);
        self.processor_params(processor_type)
            .ok()?
            .iter()
            .position(|d| d.key == wanted || normalize_param_name(d.name) == wanted)
    }

    /// Validate a numeric value for a parameter.
    pub fn validate_param_value(
        &self,
        processor_type: &str,
        param_name: &str,
        value: f32,
    ) -> ValidationResult<usize> {
        let params = self.processor_params(processor_type)?;
        let index = self
            .find_param_index(processor_type, param_name)
            .ok_or_else(|| ValidationError::UnknownParameter {
                processor: processor_type.to_string(),
                param: param_name.to_string(),
            })?;

        let desc = &params[index];
        if desc.contains(value) {
            Ok(index)
        } else {
            Err(ValidationError::OutOfRange {
                param: param_name.to_string(),
                value,
                min: desc.min,
                max: desc.max,
            })
        }
    }

    /// Parse and validate a parameter value string.
    ///
    /// Returns the parameter index and the parsed value.
    pub fn validate_param(
        &self,
        processor_type: &str,
        param_name: &str,
        value_str: &str,
    ) -> ValidationResult<(usize, f32)> {
        let value = parse_param_value(value_str).ok_or_else(|| ValidationError::InvalidFormat {
            param: param_name.to_string(),
            value: value_str.to_string(),
        })?;
        let index = self.validate_param_value(processor_type, param_name, value)?;
        Ok((index, value))
    }

    /// Validate a processor configuration, collecting every error.
    pub fn validate_processor_config(&self, config: &ProcessorConfig) -> ValidationResult<()> {
        self.validate_processor(&config.processor_type)?;

        let mut errors: Vec<ValidationError> = config
            .params
            .iter()
            .filter_map(|(name, value)| {
                self.validate_param(&config.processor_type, name, value)
                    .err()
            })
            .collect();
        collect_errors(&mut errors)
    }
}

fn normalize_param_name(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

fn collect_errors(errors: &mut Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(std::mem::take(errors))),
    }
}

/// Validate that a processor type exists.
///
/// ```rust
/// use transito_config::validate_processor;
///
/// assert!(validate_processor("transient_splitter").is_ok());
/// assert!(validate_processor("reverb").is_err());
/// ```
pub fn validate_processor(processor_type: &str) -> ValidationResult<ProcessorKind> {
    ProcessorValidator::new().validate_processor(processor_type)
}

/// Validate every processor and parameter in a preset.
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let validator = ProcessorValidator::new();
    let mut errors = Vec::new();

    for config in &preset.processors {
        match validator.validate_processor_config(config) {
            Ok(()) => {}
            Err(ValidationError::Multiple(inner)) => errors.extend(inner),
            Err(e) => errors.push(e),
        }
    }
    collect_errors(&mut errors)
}
