//! Parameter introspection for discoverable processor parameters.
//!
//! [`ParameterInfo`] lets presets, the CLI and host wrappers list, read and
//! write a processor's parameters by index or by key without knowing its
//! concrete type. Each parameter is described by a [`ParamDescriptor`].
//!
//! Setting a value through [`ParameterInfo::set_param`] forwards to the
//! processor's own setter unchanged. Range checking belongs to the caller
//! (the config layer validates against [`ParamDescriptor::contains`]); the
//! audio path never clamps.
//!
//! # Example
//!
//! ```rust
//! use transito_core::{ParamDescriptor, ParameterInfo};
//!
//! struct Trim {
//!     gain_db: f32,
//! }
//!
//! impl ParameterInfo for Trim {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::gain_db("Gain", "gain", -24.0, 24.0, 0.0)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.gain_db,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.gain_db = value;
//!         }
//!     }
//! }
//!
//! let trim = Trim { gain_db: 0.0 };
//! assert_eq!(trim.find_param("GAIN"), Some(0));
//! ```

/// Trait for processors that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the processor. Use [`param_count`](Self::param_count) to find valid indices.
pub trait ParameterInfo {
    /// Number of parameters; valid indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, `None` when out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of the parameter at `index` (0.0 when out of range).
    fn get_param(&self, index: usize) -> f32;

    /// Set the parameter at `index`. Out-of-range indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by key or display name (case-insensitive).
    fn find_param(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.key.eq_ignore_ascii_case(name) || desc.name.eq_ignore_ascii_case(name)
            })
        })
    }
}

/// Metadata for a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Display name (e.g., "Release Time").
    pub name: &'static str,
    /// Stable snake_case key used in presets and on the command line.
    pub key: &'static str,
    /// Unit for formatting and parsing.
    pub unit: ParamUnit,
    /// Minimum recommended value.
    pub min: f32,
    /// Maximum recommended value.
    pub max: f32,
    /// Value at construction.
    pub default: f32,
    /// Suggested increment for encoder-style control.
    pub step: f32,
}

impl ParamDescriptor {
    /// Level parameter in decibels.
    pub const fn gain_db(
        name: &'static str,
        key: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            key,
            unit: ParamUnit::Decibels,
            min,
            max,
            default,
            step: 0.5,
        }
    }

    /// Time constant in seconds.
    pub const fn seconds(
        name: &'static str,
        key: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            key,
            unit: ParamUnit::Seconds,
            min,
            max,
            default,
            step: 0.001,
        }
    }

    /// Dimensionless ratio (compression ratio, time multipliers).
    pub const fn ratio(
        name: &'static str,
        key: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            key,
            unit: ParamUnit::Ratio,
            min,
            max,
            default,
            step: 0.1,
        }
    }

    /// Linear gain factor.
    pub const fn linear(
        name: &'static str,
        key: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            key,
            unit: ParamUnit::Linear,
            min,
            max,
            default,
            step: 0.01,
        }
    }

    /// On/off switch stored as 0.0 / 1.0.
    pub const fn toggle(name: &'static str, key: &'static str, default: bool) -> Self {
        Self {
            name,
            key,
            unit: ParamUnit::Toggle,
            min: 0.0,
            max: 1.0,
            default: if default { 1.0 } else { 0.0 },
            step: 1.0,
        }
    }

    /// Discrete choice stored as its index `0..count`.
    pub const fn choice(name: &'static str, key: &'static str, count: u8, default: u8) -> Self {
        Self {
            name,
            key,
            unit: ParamUnit::Choice,
            min: 0.0,
            max: (count - 1) as f32,
            default: default as f32,
            step: 1.0,
        }
    }

    /// Whether `value` lies within `min..=max`.
    ///
    /// ```rust
    /// use transito_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::gain_db("Threshold", "threshold", -60.0, 0.0, -18.0);
    /// assert!(desc.contains(-18.0));
    /// assert!(!desc.contains(3.0));
    /// assert!(!desc.contains(f32::NAN));
    /// ```
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Unit type for parameter display and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels - threshold, knee, make-up gain, range.
    Decibels,
    /// Dimensionless ratio.
    Ratio,
    /// Seconds - attack and release time constants.
    Seconds,
    /// Linear gain factor.
    Linear,
    /// Boolean switch (0 or 1).
    Toggle,
    /// Enumerated choice (integer index).
    Choice,
}

impl ParamUnit {
    /// Display suffix for values in this unit.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => "dB",
            ParamUnit::Ratio => ":1",
            ParamUnit::Seconds => "s",
            ParamUnit::Linear => "x",
            ParamUnit::Toggle | ParamUnit::Choice => "",
        }
    }
}
