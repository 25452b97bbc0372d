//! Transient/sustain splitter driven by three envelope followers.
//!
//! Two envelopes share a release time but differ in attack: `envelope1`
//! rises instantly while `envelope2` rises with `attack_time`. Their
//! difference is large during onsets and vanishes once the signal settles.
//! Dividing by a fast `detector` envelope turns that difference into an
//! attack coefficient in `0..=1`:
//!
//! ```text
//! attack  = min(|envelope1 - envelope2| / |detector|, 1)
//! sustain = 1 - attack
//! y       = x * (attack * attack_gain + sustain * sustain_gain)
//! ```
//!
//! A silent detector with differing envelopes divides by zero and clamps
//! to full attack.

use transito_core::{DynamicsProcessor, Envelope, ParamDescriptor, ParameterInfo};

/// Attack weight for one sample.
///
/// ```rust
/// use transito_dynamics::transient_splitter::attack_coefficient;
///
/// assert_eq!(attack_coefficient(0.5, 0.25, 0.5), 0.5);
/// assert_eq!(attack_coefficient(0.9, 0.1, 0.2), 1.0);
/// assert_eq!(attack_coefficient(0.3, 0.1, 0.0), 1.0);
/// ```
#[inline]
pub fn attack_coefficient(envelope1: f32, envelope2: f32, detector: f32) -> f32 {
    ((envelope1 - envelope2).abs() / detector.abs()).min(1.0)
}

/// Splits a signal into transient and sustain parts and re-mixes them with
/// independent gains.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Attack Gain | 0.0–4.0 | 1.0 |
/// | 1 | Sustain Gain | 0.0–4.0 | 1.0 |
/// | 2 | Attack Time | 0.001–0.5 s | 0.03 |
/// | 3 | Detector Attack | 0.0–0.1 s | 0.001 |
/// | 4 | Release Time | 0.01–5.0 s | 0.15 |
/// | 5 | Release Ratio | 0.01–1.0 | 0.5 |
///
/// # Example
///
/// ```rust
/// use transito_core::DynamicsProcessor;
/// use transito_dynamics::TransientSplitter;
///
/// let mut splitter = TransientSplitter::new();
/// splitter.set_attack(0.0);
/// splitter.prepare(48000.0, 128);
///
/// let mut block = vec![0.0f32; 128];
/// block[64..].fill(0.8);
/// splitter.process_block(&mut [&mut block[..]]);
/// // Onset is removed with attack gain at zero
/// assert!(block[64].abs() < 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct TransientSplitter {
    attack_gain: f32,
    sustain_gain: f32,
    release_time_ratio: f32,
    detector: Envelope,
    /// Instant attack
    envelope1: Envelope,
    /// Slow attack
    envelope2: Envelope,
    last_attack_coeff: f32,
}

impl TransientSplitter {
    /// Create a splitter with unity gains, 30 ms attack and 150 ms release.
    pub fn new() -> Self {
        let attack_time = 0.03;
        let release_time = 0.15;
        let release_time_ratio = 0.5;
        Self {
            attack_gain: 1.0,
            sustain_gain: 1.0,
            release_time_ratio,
            detector: Envelope::with_times(0.001, release_time * release_time_ratio),
            envelope1: Envelope::with_times(0.0, release_time),
            envelope2: Envelope::with_times(attack_time, release_time),
            last_attack_coeff: 0.0,
        }
    }

    /// Set the linear gain applied to the transient part.
    pub fn set_attack(&mut self, gain: f32) {
        self.attack_gain = gain;
    }

    /// Transient gain.
    pub fn attack(&self) -> f32 {
        self.attack_gain
    }

    /// Set the linear gain applied to the sustain part.
    pub fn set_sustain(&mut self, gain: f32) {
        self.sustain_gain = gain;
    }

    /// Sustain gain.
    pub fn sustain(&self) -> f32 {
        self.sustain_gain
    }

    /// Set the attack time of the slow envelope in seconds.
    pub fn set_attack_time(&mut self, seconds: f32) {
        self.envelope2.set_attack_time(seconds);
    }

    /// Attack time of the slow envelope in seconds.
    pub fn attack_time(&self) -> f32 {
        self.envelope2.attack_time()
    }

    /// Set the detector attack time in seconds.
    pub fn set_attack_time_detector(&mut self, seconds: f32) {
        self.detector.set_attack_time(seconds);
    }

    /// Detector attack time in seconds.
    pub fn attack_time_detector(&self) -> f32 {
        self.detector.attack_time()
    }

    /// Set the shared release time in seconds.
    ///
    /// The detector release follows as `seconds * release_time_ratio`.
    pub fn set_release_time(&mut self, seconds: f32) {
        self.envelope1.set_release_time(seconds);
        self.envelope2.set_release_time(seconds);
        self.detector
            .set_release_time(seconds * self.release_time_ratio);
    }

    /// Release time of both envelopes in seconds.
    pub fn release_time(&self) -> f32 {
        self.envelope1.release_time()
    }

    /// Set the detector release as a fraction of the release time.
    pub fn set_release_time_ratio(&mut self, ratio: f32) {
        self.release_time_ratio = ratio;
        self.detector
            .set_release_time(self.envelope1.release_time() * ratio);
    }

    /// Detector release as a fraction of the release time.
    pub fn release_time_ratio(&self) -> f32 {
        self.release_time_ratio
    }

    /// Detector release time in seconds.
    pub fn detector_release_time(&self) -> f32 {
        self.detector.release_time()
    }

    /// Attack coefficient of the last processed sample.
    pub fn last_attack_coefficient(&self) -> f32 {
        self.last_attack_coeff
    }
}

impl Default for TransientSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicsProcessor for TransientSplitter {
    fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        self.detector.prepare(sample_rate, max_block_size);
        self.envelope1.prepare(sample_rate, max_block_size);
        self.envelope2.prepare(sample_rate, max_block_size);

        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate, max_block_size, "transient splitter prepared");
    }

    fn process_block(&mut self, buffer: &mut [&mut [f32]]) {
        self.detector.process_block(&*buffer);
        self.envelope1.process_block(&*buffer);
        self.envelope2.process_block(&*buffer);

        let frames = self.detector.block_len();
        let mut coeff = self.last_attack_coeff;
        for j in 0..frames {
            coeff = attack_coefficient(
                self.envelope1.get_sample(j),
                self.envelope2.get_sample(j),
                self.detector.get_sample(j),
            );
            let gain = coeff * self.attack_gain + (1.0 - coeff) * self.sustain_gain;
            for channel in buffer.iter_mut() {
                channel[j] *= gain;
            }
        }
        self.last_attack_coeff = coeff;
    }

    fn reset(&mut self) {
        self.detector.reset();
        self.envelope1.reset();
        self.envelope2.reset();
        self.last_attack_coeff = 0.0;
    }
}

impl ParameterInfo for TransientSplitter {
    fn param_count(&self) -> usize {
        6
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::linear("Attack Gain", "attack", 0.0, 4.0, 1.0)),
            1 => Some(ParamDescriptor::linear(
                "Sustain Gain",
                "sustain",
                0.0,
                4.0,
                1.0,
            )),
            2 => Some(ParamDescriptor::seconds(
                "Attack Time",
                "attack_time",
                0.001,
                0.5,
                0.03,
            )),
            3 => Some(ParamDescriptor::seconds(
                "Detector Attack",
                "attack_time_detector",
                0.0,
                0.1,
                0.001,
            )),
            4 => Some(ParamDescriptor::seconds(
                "Release Time",
                "release_time",
                0.01,
                5.0,
                0.15,
            )),
            5 => Some(ParamDescriptor::ratio(
                "Release Ratio",
                "release_time_ratio",
                0.01,
                1.0,
                0.5,
            )),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.attack(),
            1 => self.sustain(),
            2 => self.attack_time(),
            3 => self.attack_time_detector(),
            4 => self.release_time(),
            5 => self.release_time_ratio(),
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_attack(value),
            1 => self.set_sustain(value),
            2 => self.set_attack_time(value),
            3 => self.set_attack_time_detector(value),
            4 => self.set_release_time(value),
            5 => self.set_release_time_ratio(value),
            _ => {}
        }
    }
}
