//! Soft-knee compressor/expander with optional automatic make-up gain.
//!
//! # Signal Flow
//!
//! ```text
//! Input → Envelope → amp→dB → Gain Law → × dB→amp(cv + make-up) → Output
//!   │                                                     │
//!   └──── RMS ring (in) ──────── auto make-up ─── RMS ring (out)
//! ```
//!
//! # Gain Law
//!
//! With `d = level - threshold` (upward) or `d = threshold - level`
//! (expander) and `slope = 1/ratio - 1`:
//!
//! | Region | Condition | Control voltage |
//! |--------|-----------|-----------------|
//! | Above knee | `2d > knee` | `slope * d` |
//! | In knee | `2|d| <= knee` | `slope * (d + knee/2)² / (2 * knee)` |
//! | Below knee | otherwise | `0` |
//!
//! Active regions are floored at `-range`.
//!
//! # Parameters
//!
//! | Parameter | Range | Description |
//! |-----------|-------|-------------|
//! | Threshold | -60 to 0 dB | Level where the curve bends |
//! | Ratio | 1:1 to 20:1 | Curve slope above the knee |
//! | Knee | 0-24 dB | Width of the soft transition |
//! | Make-up | -24 to 24 dB | Static output gain |
//! | Range | 0-120 dB | Maximum gain change |
//! | Attack | 0-1 s | Envelope attack, 0 = instant |
//! | Release | 1 ms-5 s | Envelope release |
//! | Auto Make-up | on/off | Closed-loop RMS make-up |
//! | Type | Upward/Expander | Which side of the threshold is processed |
//!
//! Setters store values as given. Keeping ratio and knee away from zero is
//! the caller's responsibility.

use transito_core::{
    DynamicsProcessor, Envelope, ParamDescriptor, ParameterInfo, apply_gain_ramp, db_to_linear,
    linear_to_db,
};

use crate::auto_make_up::AutoMakeUpGain;

/// Which side of the threshold the gain law acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionType {
    /// Levels above the threshold are processed.
    #[default]
    Upward,
    /// Levels below the threshold are processed.
    Expander,
}

impl CompressionType {
    /// All variants in parameter-index order.
    pub const ALL: [CompressionType; 2] = [CompressionType::Upward, CompressionType::Expander];

    /// Choice index used by [`ParameterInfo`].
    pub const fn index(self) -> u8 {
        match self {
            CompressionType::Upward => 0,
            CompressionType::Expander => 1,
        }
    }

    /// Variant for a choice index. Anything past the last index is an expander.
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => CompressionType::Upward,
            _ => CompressionType::Expander,
        }
    }

    /// Lowercase name as used in presets.
    pub const fn name(self) -> &'static str {
        match self {
            CompressionType::Upward => "upward",
            CompressionType::Expander => "expander",
        }
    }
}

/// Static curve parameters: everything that maps a level to a control voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorParameters {
    /// Threshold in dB.
    pub threshold_db: f32,
    /// Ratio, `1.0` is unity.
    pub ratio: f32,
    /// Knee width in dB.
    pub knee_db: f32,
    /// Largest gain change in dB (positive).
    pub range_db: f32,
    /// Side of the threshold being processed.
    pub compression_type: CompressionType,
}

impl Default for CompressorParameters {
    fn default() -> Self {
        Self {
            threshold_db: -18.0,
            ratio: 4.0,
            knee_db: 6.0,
            range_db: 60.0,
            compression_type: CompressionType::Upward,
        }
    }
}

impl CompressorParameters {
    /// Control voltage in dB for an envelope level in dB.
    ///
    /// Zero below the knee. With `ratio == 1.0` the result is zero everywhere.
    ///
    /// ```rust
    /// use transito_dynamics::CompressorParameters;
    ///
    /// let params = CompressorParameters {
    ///     threshold_db: -20.0,
    ///     ratio: 4.0,
    ///     knee_db: 0.0,
    ///     ..Default::default()
    /// };
    /// // 8 dB over the threshold at 4:1 leaves 2 dB: a 6 dB cut
    /// assert!((params.control_voltage_db(-12.0) + 6.0).abs() < 1e-5);
    /// assert_eq!(params.control_voltage_db(-30.0), 0.0);
    /// ```
    #[inline]
    pub fn control_voltage_db(&self, level_db: f32) -> f32 {
        let d = match self.compression_type {
            CompressionType::Upward => level_db - self.threshold_db,
            CompressionType::Expander => self.threshold_db - level_db,
        };
        let slope = 1.0 / self.ratio - 1.0;
        let knee = self.knee_db;

        if 2.0 * d > knee {
            (slope * d).max(-self.range_db)
        } else if 2.0 * d.abs() <= knee {
            // A hard knee only reaches this branch at d == 0, where the
            // parabola's limit is 0.
            if knee <= 0.0 {
                return 0.0;
            }
            let x = d + knee / 2.0;
            (slope * x * x / (2.0 * knee)).max(-self.range_db)
        } else {
            0.0
        }
    }
}

/// Feed-forward compressor/expander.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Threshold | -60.0–0.0 dB | -18.0 |
/// | 1 | Ratio | 1.0–20.0 | 4.0 |
/// | 2 | Knee | 0.0–24.0 dB | 6.0 |
/// | 3 | Make-up Gain | -24.0–24.0 dB | 0.0 |
/// | 4 | Range | 0.0–120.0 dB | 60.0 |
/// | 5 | Attack | 0.0–1.0 s | 0.01 |
/// | 6 | Release | 0.001–5.0 s | 0.1 |
/// | 7 | Auto Make-up | off/on | off |
/// | 8 | Type | Upward / Expander | Upward |
///
/// # Example
///
/// ```rust
/// use transito_core::DynamicsProcessor;
/// use transito_dynamics::Compressor;
///
/// let mut comp = Compressor::new();
/// comp.set_threshold(-24.0);
/// comp.set_ratio(3.0);
/// comp.prepare(48000.0, 256);
///
/// let mut left = vec![0.8f32; 256];
/// let mut right = vec![0.8f32; 256];
/// comp.process_block(&mut [&mut left[..], &mut right[..]]);
/// assert!(left[255] < 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct Compressor {
    parameters: CompressorParameters,
    /// Static make-up gain in dB; overwritten by the measured gain while
    /// automatic make-up is on
    make_up_gain_db: f32,
    auto_make_up_enabled: bool,
    envelope: Envelope,
    auto_make_up: AutoMakeUpGain,
    /// Control voltage of the last processed sample
    last_control_voltage_db: f32,
}

impl Compressor {
    /// Create a compressor with default settings.
    pub fn new() -> Self {
        Self {
            parameters: CompressorParameters::default(),
            make_up_gain_db: 0.0,
            auto_make_up_enabled: false,
            envelope: Envelope::with_times(0.01, 0.1),
            auto_make_up: AutoMakeUpGain::new(),
            last_control_voltage_db: 0.0,
        }
    }

    /// Set threshold in dB.
    pub fn set_threshold(&mut self, threshold_db: f32) {
        self.parameters.threshold_db = threshold_db;
    }

    /// Threshold in dB.
    pub fn threshold(&self) -> f32 {
        self.parameters.threshold_db
    }

    /// Set ratio. Zero is not rejected.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.parameters.ratio = ratio;
    }

    /// Ratio.
    pub fn ratio(&self) -> f32 {
        self.parameters.ratio
    }

    /// Set knee width in dB.
    pub fn set_knee(&mut self, knee_db: f32) {
        self.parameters.knee_db = knee_db;
    }

    /// Knee width in dB.
    pub fn knee(&self) -> f32 {
        self.parameters.knee_db
    }

    /// Set static make-up gain in dB.
    pub fn set_make_up_gain(&mut self, gain_db: f32) {
        self.make_up_gain_db = gain_db;
    }

    /// Make-up gain in dB. While automatic make-up is on this is the gain
    /// reached at the end of the last block.
    pub fn make_up_gain(&self) -> f32 {
        self.make_up_gain_db
    }

    /// Set maximum gain change in dB.
    pub fn set_range(&mut self, range_db: f32) {
        self.parameters.range_db = range_db;
    }

    /// Maximum gain change in dB.
    pub fn range(&self) -> f32 {
        self.parameters.range_db
    }

    /// Set envelope attack time in seconds. Zero is instant attack.
    pub fn set_attack_time(&mut self, seconds: f32) {
        self.envelope.set_attack_time(seconds);
    }

    /// Envelope attack time in seconds.
    pub fn attack_time(&self) -> f32 {
        self.envelope.attack_time()
    }

    /// Set envelope release time in seconds.
    pub fn set_release_time(&mut self, seconds: f32) {
        self.envelope.set_release_time(seconds);
    }

    /// Envelope release time in seconds.
    pub fn release_time(&self) -> f32 {
        self.envelope.release_time()
    }

    /// Enable or disable automatic make-up gain.
    pub fn set_auto_make_up_gain(&mut self, enabled: bool) {
        #[cfg(feature = "tracing")]
        if enabled != self.auto_make_up_enabled {
            tracing::debug!(enabled, "auto make-up gain toggled");
        }
        self.auto_make_up_enabled = enabled;
    }

    /// Whether automatic make-up gain is on.
    pub fn auto_make_up_gain(&self) -> bool {
        self.auto_make_up_enabled
    }

    /// Set compression type.
    pub fn set_compression_type(&mut self, compression_type: CompressionType) {
        self.parameters.compression_type = compression_type;
    }

    /// Compression type.
    pub fn compression_type(&self) -> CompressionType {
        self.parameters.compression_type
    }

    /// Curve parameters.
    pub fn parameters(&self) -> &CompressorParameters {
        &self.parameters
    }

    /// Control voltage in dB of the last processed sample, make-up excluded.
    pub fn gain_reduction_db(&self) -> f32 {
        self.last_control_voltage_db
    }

    /// Length of the auto make-up RMS rings computed by the last `prepare`.
    pub fn auto_make_up_buffer_size(&self) -> usize {
        self.auto_make_up.buffer_size()
    }

    /// Linear gain at which the next block's make-up ramp starts.
    pub fn previous_make_up_gain(&self) -> f32 {
        self.auto_make_up.previous_make_up_gain
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicsProcessor for Compressor {
    fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        self.envelope.prepare(sample_rate, max_block_size);
        self.auto_make_up.prepare(sample_rate, max_block_size);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            max_block_size,
            ring_size = self.auto_make_up.buffer_size(),
            "compressor prepared"
        );
    }

    fn process_block(&mut self, buffer: &mut [&mut [f32]]) {
        self.envelope.process_block(&*buffer);
        let frames = self.envelope.block_len();
        if frames == 0 {
            return;
        }

        if self.auto_make_up_enabled {
            self.auto_make_up.capture_input(buffer, frames);
        }

        let make_up_db = if self.auto_make_up_enabled {
            0.0
        } else {
            self.make_up_gain_db
        };
        let mut cv = self.last_control_voltage_db;
        for (j, &level) in self.envelope.samples().iter().enumerate() {
            cv = self.parameters.control_voltage_db(linear_to_db(level));
            let gain = db_to_linear(cv + make_up_db);
            for channel in buffer.iter_mut() {
                channel[j] *= gain;
            }
        }
        self.last_control_voltage_db = cv;

        if self.auto_make_up_enabled {
            self.auto_make_up.capture_output(buffer, frames);
            let target = self.auto_make_up.target_gain();
            let start = self.auto_make_up.previous_make_up_gain;
            for channel in buffer.iter_mut() {
                apply_gain_ramp(&mut channel[..frames], start, target);
            }
            self.auto_make_up.previous_make_up_gain = target;
            self.make_up_gain_db = linear_to_db(target);
        } else {
            self.auto_make_up.previous_make_up_gain = db_to_linear(self.make_up_gain_db);
        }
    }

    fn reset(&mut self) {
        self.envelope.reset();
        self.auto_make_up.reset(db_to_linear(self.make_up_gain_db));
        self.last_control_voltage_db = 0.0;
    }
}

impl ParameterInfo for Compressor {
    fn param_count(&self) -> usize {
        9
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::gain_db(
                "Threshold",
                "threshold",
                -60.0,
                0.0,
                -18.0,
            )),
            1 => Some(ParamDescriptor::ratio("Ratio", "ratio", 1.0, 20.0, 4.0)),
            2 => Some(ParamDescriptor::gain_db("Knee", "knee", 0.0, 24.0, 6.0)),
            3 => Some(ParamDescriptor::gain_db(
                "Make-up Gain",
                "make_up_gain",
                -24.0,
                24.0,
                0.0,
            )),
            4 => Some(ParamDescriptor::gain_db("Range", "range", 0.0, 120.0, 60.0)),
            5 => Some(ParamDescriptor::seconds(
                "Attack",
                "attack_time",
                0.0,
                1.0,
                0.01,
            )),
            6 => Some(ParamDescriptor::seconds(
                "Release",
                "release_time",
                0.001,
                5.0,
                0.1,
            )),
            7 => Some(ParamDescriptor::toggle(
                "Auto Make-up",
                "auto_make_up_gain",
                false,
            )),
            8 => Some(ParamDescriptor::choice(
                "Type",
                "compression_type",
                CompressionType::ALL.len() as u8,
                0,
            )),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.threshold(),
            1 => self.ratio(),
            2 => self.knee(),
            3 => self.make_up_gain(),
            4 => self.range(),
            5 => self.attack_time(),
            6 => self.release_time(),
            7 => {
                if self.auto_make_up_enabled {
                    1.0
                } else {
                    0.0
                }
            }
            8 => f32::from(self.compression_type().index()),
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_threshold(value),
            1 => self.set_ratio(value),
            2 => self.set_knee(value),
            3 => self.set_make_up_gain(value),
            4 => self.set_range(value),
            5 => self.set_attack_time(value),
            6 => self.set_release_time(value),
            7 => self.set_auto_make_up_gain(value >= 0.5),
            8 => {
                let index = if value >= 0.5 { 1 } else { 0 };
                self.set_compression_type(CompressionType::from_index(index));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::{vec, vec::Vec};

    const SR: f32 = 48000.0;

    fn params(compression_type: CompressionType, knee_db: f32) -> CompressorParameters {
        CompressorParameters {
            threshold_db: -20.0,
            ratio: 4.0,
            knee_db,
            range_db: 60.0,
            compression_type,
        }
    }

    fn run_stereo(comp: &mut Compressor, amplitude: f32, frames: usize) -> (Vec<f32>, Vec<f32>) {
        let mut left = vec![amplitude; frames];
        let mut right = vec![amplitude; frames];
        comp.process_block(&mut [&mut left[..], &mut right[..]]);
        (left, right)
    }

    #[test]
    fn test_unity_ratio_applies_only_make_up() {
        let mut comp = Compressor::new();
        comp.set_ratio(1.0);
        comp.set_threshold(-40.0);
        comp.set_make_up_gain(6.0);
        comp.prepare(SR, 128);

        let input: Vec<f32> = (0..128).map(|i| libm::sinf(i as f32 * 0.1) * 0.9).collect();
        let mut block = input.clone();
        comp.process_block(&mut [&mut block[..]]);

        let gain = db_to_linear(6.0);
        for (out, inp) in block.iter().zip(&input) {
            assert!((out - inp * gain).abs() < 1e-6);
        }
        assert_eq!(comp.gain_reduction_db(), 0.0);
    }

    #[test]
    fn test_unity_ratio_expander_on_silence() {
        let mut comp = Compressor::new();
        comp.set_ratio(1.0);
        comp.set_compression_type(CompressionType::Expander);
        comp.prepare(SR, 32);

        let (left, _) = run_stereo(&mut comp, 0.0, 32);
        assert!(left.iter().all(|s| *s == 0.0));
        assert!(comp.gain_reduction_db().is_finite());
    }

    #[test]
    fn test_knee_continuity_upward() {
        let p = params(CompressionType::Upward, 6.0);
        let slope = 1.0 / p.ratio - 1.0;

        // Upper boundary, d = +knee/2: knee formula equals linear formula
        let upper = p.threshold_db + 3.0;
        let knee_side = p.control_voltage_db(upper);
        let linear_side = slope * 3.0;
        assert!((knee_side - linear_side).abs() < 1e-5);
        let just_above = p.control_voltage_db(upper + 1e-3);
        assert!((just_above - knee_side).abs() < 1e-2);

        // Lower boundary, d = -knee/2: knee formula reaches zero
        let lower = p.threshold_db - 3.0;
        assert!(p.control_voltage_db(lower).abs() < 1e-6);
        assert_eq!(p.control_voltage_db(lower - 1e-3), 0.0);
    }

    #[test]
    fn test_hard_knee_at_threshold_is_continuous() {
        for kind in CompressionType::ALL {
            let mut p = params(kind, 0.0);
            p.threshold_db = 0.0;
            assert_eq!(p.control_voltage_db(0.0), 0.0, "{kind:?}");
            assert!(p.control_voltage_db(-1e-3).abs() < 1e-3, "{kind:?}");
            assert!(p.control_voltage_db(1e-3).abs() < 1e-3, "{kind:?}");
        }
    }

    #[test]
    fn test_full_scale_square_at_hard_knee_threshold_passes() {
        let mut comp = Compressor::new();
        comp.set_threshold(0.0);
        comp.set_ratio(4.0);
        comp.set_knee(0.0);
        comp.set_attack_time(0.0);
        comp.prepare(SR, 64);

        let mut block: Vec<f32> = (0..64).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        comp.process_block(&mut [&mut block[..]]);

        for (i, &s) in block.iter().enumerate() {
            assert!((s.abs() - 1.0).abs() < 1e-4, "sample {i} = {s}");
        }
        assert!(comp.gain_reduction_db().abs() < 1e-4);
    }

    #[test]
    fn test_knee_continuity_expander() {
        let p = params(CompressionType::Expander, 10.0);
        let slope = 1.0 / p.ratio - 1.0;

        let upper = p.threshold_db - 5.0;
        assert!((p.control_voltage_db(upper) - slope * 5.0).abs() < 1e-5);
        assert!(p.control_voltage_db(p.threshold_db + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_upward_and_expander_are_mirrored() {
        let mut up = params(CompressionType::Upward, 0.0);
        up.threshold_db = 0.0;
        let mut down = up;
        down.compression_type = CompressionType::Expander;

        for x in [0.5f32, 3.0, 12.0, 40.0] {
            let a = up.control_voltage_db(x);
            let b = down.control_voltage_db(-x);
            assert!((a - b).abs() < 1e-6, "x={x}: {a} vs {b}");
            assert!(a < 0.0);
        }
        assert_eq!(up.control_voltage_db(-10.0), 0.0);
        assert_eq!(down.control_voltage_db(10.0), 0.0);
    }

    #[test]
    fn test_range_clamps_control_voltage() {
        let mut p = params(CompressionType::Upward, 0.0);
        p.ratio = 100.0;
        p.range_db = 12.0;
        assert_eq!(p.control_voltage_db(20.0), -12.0);
    }

    #[test]
    fn test_compresses_above_threshold() {
        let mut comp = Compressor::new();
        comp.set_threshold(-20.0);
        comp.set_ratio(4.0);
        comp.set_knee(0.0);
        comp.set_attack_time(0.0);
        comp.prepare(SR, 64);

        // Input at -6 dB, 14 dB over: expect a 10.5 dB cut
        let (left, right) = run_stereo(&mut comp, db_to_linear(-6.0), 64);
        let out_db = linear_to_db(left[63]);
        assert!((out_db - (-16.5)).abs() < 0.01, "got {out_db}");
        assert_eq!(left, right);
        assert!((comp.gain_reduction_db() + 10.5).abs() < 0.01);
    }

    #[test]
    fn test_below_threshold_passes_with_make_up() {
        let mut comp = Compressor::new();
        comp.set_threshold(-10.0);
        comp.set_knee(2.0);
        comp.set_make_up_gain(-3.0);
        comp.prepare(SR, 64);

        let (left, _) = run_stereo(&mut comp, db_to_linear(-30.0), 64);
        let expected = db_to_linear(-30.0) * db_to_linear(-3.0);
        assert!((left[10] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_prepare_sizes_ring() {
        let mut comp = Compressor::new();
        comp.prepare(SR, 512);
        assert_eq!(comp.auto_make_up_buffer_size(), 93 * 512);
        comp.prepare(44100.0, 1000);
        assert_eq!(comp.auto_make_up_buffer_size(), 44000);
    }

    #[test]
    fn test_auto_make_up_restores_level() {
        let mut comp = Compressor::new();
        comp.set_threshold(-30.0);
        comp.set_ratio(8.0);
        comp.set_attack_time(0.0);
        comp.set_auto_make_up_gain(true);
        comp.prepare(4096.0, 256);

        let amplitude = 0.5;
        let mut last = Vec::new();
        for _ in 0..32 {
            let (left, _) = run_stereo(&mut comp, amplitude, 256);
            last = left;
        }
        let out = last[255];
        assert!(
            (out - amplitude).abs() < 0.02,
            "auto make-up should restore ~{amplitude}, got {out}"
        );
        assert!(comp.make_up_gain() > 0.0);
        assert!((db_to_linear(comp.make_up_gain()) - comp.previous_make_up_gain()).abs() < 1e-4);
    }

    #[test]
    fn test_auto_make_up_ramp_is_continuous() {
        let mut comp = Compressor::new();
        comp.set_threshold(-30.0);
        comp.set_ratio(8.0);
        comp.set_attack_time(0.0);
        comp.set_auto_make_up_gain(true);
        comp.prepare(4096.0, 128);

        let mut prev_last: Option<f32> = None;
        for _ in 0..8 {
            let (left, _) = run_stereo(&mut comp, 0.5, 128);
            if let Some(prev) = prev_last {
                assert!((left[0] - prev).abs() < 0.05, "jump {prev} -> {}", left[0]);
            }
            prev_last = Some(left[127]);
        }
    }

    #[test]
    fn test_toggling_auto_make_up_tracks_static_gain() {
        let mut comp = Compressor::new();
        comp.set_make_up_gain(6.0);
        comp.prepare(SR, 32);
        run_stereo(&mut comp, 0.1, 32);
        assert!((comp.previous_make_up_gain() - db_to_linear(6.0)).abs() < 1e-6);

        comp.set_auto_make_up_gain(true);
        let (left, _) = run_stereo(&mut comp, 0.1, 32);
        // Ramp starts where the static gain left off
        let first_gain = left[0] / 0.1;
        assert!(first_gain > 1.5, "ramp restarted from unity: {first_gain}");
    }

    #[test]
    fn test_auto_make_up_with_empty_ring() {
        let mut comp = Compressor::new();
        comp.set_auto_make_up_gain(true);
        comp.prepare(1000.0, 2048);
        assert_eq!(comp.auto_make_up_buffer_size(), 0);

        let (left, _) = run_stereo(&mut comp, 0.5, 64);
        assert!(left.iter().all(|s| s.is_finite()));
        assert_eq!(comp.previous_make_up_gain(), 1.0);
    }

    #[test]
    fn test_param_info_roundtrip() {
        let mut comp = Compressor::new();
        assert_eq!(comp.param_count(), 9);
        for i in 0..comp.param_count() {
            let desc = comp.param_info(i).unwrap();
            assert_eq!(comp.get_param(i), desc.default, "{}", desc.key);
        }
        assert!(comp.param_info(9).is_none());

        comp.set_param(8, 1.0);
        assert_eq!(comp.compression_type(), CompressionType::Expander);
        comp.set_param(7, 1.0);
        assert!(comp.auto_make_up_gain());
        comp.set_param(6, 0.25);
        assert_eq!(comp.release_time(), 0.25);
        assert_eq!(comp.find_param("knee"), Some(2));
        assert_eq!(comp.find_param("Make-up Gain"), Some(3));
    }

    #[test]
    fn test_reset_clears_envelope() {
        let mut comp = Compressor::new();
        comp.set_attack_time(0.0);
        comp.prepare(SR, 64);
        run_stereo(&mut comp, 1.0, 64);
        comp.reset();
        assert_eq!(comp.gain_reduction_db(), 0.0);

        // Quiet block right after reset is not attenuated by stale envelope
        comp.set_release_time(10.0);
        let (left, _) = run_stereo(&mut comp, 0.01, 64);
        assert!((left[0] - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_compression_type_index_roundtrip() {
        for t in CompressionType::ALL {
            assert_eq!(CompressionType::from_index(t.index()), t);
        }
        assert_eq!(CompressionType::default().name(), "upward");
    }
}
