//! Level conversions and block helpers shared by the dynamics processors.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear amplitude
//!
//! # Block Helpers
//!
//! - [`rms`] - Root-mean-square level of a buffer
//! - [`apply_gain_ramp`] - Linear gain ramp across a block
//! - [`coefficient_from_time`] - One-pole smoothing coefficient

use libm::{expf, logf, sqrtf};

/// Smallest amplitude considered by [`linear_to_db`] (-200 dB).
pub const MIN_AMPLITUDE: f32 = 1e-10;

/// Convert decibels to linear amplitude (`10^(db/20)`).
///
/// # Example
/// ```rust
/// use transito_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear amplitude to decibels (`20*log10(amp)`).
///
/// Amplitudes at or below [`MIN_AMPLITUDE`] (including silence and negative
/// values) map to -200 dB instead of `-inf`/NaN, so the gain computers never
/// see an infinite level.
///
/// # Example
/// ```rust
/// use transito_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(MIN_AMPLITUDE)) * FACTOR
}

/// One-pole smoothing coefficient for a time constant.
///
/// `exp(-1 / (time_secs * sample_rate))`: after `time_secs` seconds a step
/// has settled to 63%. A zero time gives 0.0 (no smoothing). Non-positive
/// sample rates or negative times are not guarded.
#[inline]
pub fn coefficient_from_time(time_secs: f32, sample_rate: f32) -> f32 {
    expf(-1.0 / (time_secs * sample_rate))
}

/// Root-mean-square level of a buffer. Empty buffers have level 0.
#[inline]
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    sqrtf(sum / samples.len() as f32)
}

/// Multiply a block by a gain that ramps linearly from `start_gain` to `end_gain`.
///
/// The first sample is scaled by `start_gain`; the gain advances by
/// `(end_gain - start_gain) / len` per sample, so `end_gain` is reached on the
/// sample after the block. The next block starting at `end_gain` continues
/// the ramp without a step.
#[inline]
pub fn apply_gain_ramp(samples: &mut [f32], start_gain: f32, end_gain: f32) {
    if samples.is_empty() {
        return;
    }
    if start_gain == end_gain {
        for sample in samples.iter_mut() {
            *sample *= start_gain;
        }
        return;
    }

    let increment = (end_gain - start_gain) / samples.len() as f32;
    let mut gain = start_gain;
    for sample in samples.iter_mut() {
        *sample *= gain;
        gain += increment;
    }
}
