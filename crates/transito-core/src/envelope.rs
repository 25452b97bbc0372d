//! Block-based envelope follower for dynamics processing.
//!
//! Converts a (possibly multi-channel) audio block into a single smoothed
//! amplitude signal with independent attack and release time constants.
//! The compressor and transient splitter both read their control signal
//! from an [`Envelope`].
//!
//! # Detector
//!
//! - Mono: `|x[j]|`. The sample is rectified rather than used raw, so a
//!   negative half-cycle raises the envelope the same way a positive one does.
//! - Two or more channels: `max(|ch0[j]|, |ch1[j]|)`; channels beyond the
//!   first stereo pair do not contribute.
//!
//! # Smoothing
//!
//! ```text
//! y[j] = c * y[j-1] + (1 - c) * detector[j]
//! c    = attack coefficient  if detector[j] > y[j-1]
//!        release coefficient otherwise
//! ```
//!
//! With an attack time of exactly zero the envelope jumps to the detector
//! value on rising input and only the release is smoothed.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::math::coefficient_from_time;

/// Default attack time in seconds.
pub const DEFAULT_ATTACK_TIME: f32 = 0.01;

/// Default release time in seconds.
pub const DEFAULT_RELEASE_TIME: f32 = 0.1;

/// Sample rate assumed until [`Envelope::prepare`] is called.
pub const DEFAULT_SAMPLE_RATE: f32 = 48000.0;

/// Attack/release envelope follower operating on whole blocks.
///
/// The envelope and detector buffers are allocated by [`prepare`](Self::prepare)
/// and reused for every block, so [`process_block`](Self::process_block) never
/// allocates. The trailing envelope value is carried across blocks and across
/// `prepare` calls.
///
/// # Example
///
/// ```rust
/// use transito_core::Envelope;
///
/// let mut env = Envelope::with_times(0.05, 0.3);
/// env.prepare(48000.0, 512);
///
/// let block = vec![0.5f32; 512];
/// env.process_block(&[&block[..]]);
///
/// let level = env.get_sample(511);
/// assert!(level > 0.0 && level < 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Envelope {
    /// Attack time constant in seconds
    attack_time: f32,
    /// Release time constant in seconds
    release_time: f32,
    sample_rate: f32,
    attack_coeff: f32,
    release_coeff: f32,
    /// Smoothed output, sized to the max block size
    envelope: Vec<f32>,
    /// Rectified detector input, sized to the max block size
    detector: Vec<f32>,
    /// Envelope value after the last processed sample
    last_value: f32,
    /// Number of valid samples from the last block
    block_len: usize,
}

impl Envelope {
    /// Create an envelope follower with the default time constants
    /// (10 ms attack, 100 ms release).
    pub fn new() -> Self {
        Self::with_times(DEFAULT_ATTACK_TIME, DEFAULT_RELEASE_TIME)
    }

    /// Create an envelope follower with attack and release times in seconds.
    pub fn with_times(attack_time: f32, release_time: f32) -> Self {
        let mut env = Self {
            attack_time,
            release_time,
            sample_rate: DEFAULT_SAMPLE_RATE,
            attack_coeff: 0.0,
            release_coeff: 0.0,
            envelope: Vec::new(),
            detector: Vec::new(),
            last_value: 0.0,
            block_len: 0,
        };
        env.recalculate_attack();
        env.recalculate_release();
        env
    }

    /// Set the sample rate and allocate buffers for blocks of up to
    /// `max_block_size` frames.
    ///
    /// Both coefficients are recomputed. The carried envelope value is kept,
    /// so a sample-rate change does not restart the envelope from zero.
    /// Must be called before the first [`process_block`](Self::process_block).
    pub fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        self.sample_rate = sample_rate;
        self.recalculate_attack();
        self.recalculate_release();

        self.envelope.clear();
        self.envelope.resize(max_block_size, 0.0);
        self.detector.clear();
        self.detector.resize(max_block_size, 0.0);
        self.block_len = 0;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            max_block_size,
            attack_coeff = self.attack_coeff,
            release_coeff = self.release_coeff,
            "envelope prepared"
        );
    }

    /// Set the attack time in seconds and recompute its coefficient.
    ///
    /// Zero selects instant attack.
    pub fn set_attack_time(&mut self, seconds: f32) {
        self.attack_time = seconds;
        self.recalculate_attack();
    }

    /// Attack time in seconds.
    pub fn attack_time(&self) -> f32 {
        self.attack_time
    }

    /// Set the release time in seconds and recompute its coefficient.
    ///
    /// Callers must pass a positive time; zero or negative values are not
    /// rejected and yield a degenerate coefficient.
    pub fn set_release_time(&mut self, seconds: f32) {
        self.release_time = seconds;
        self.recalculate_release();
    }

    /// Release time in seconds.
    pub fn release_time(&self) -> f32 {
        self.release_time
    }

    /// Current attack coefficient.
    pub fn attack_coefficient(&self) -> f32 {
        self.attack_coeff
    }

    /// Current release coefficient.
    pub fn release_coefficient(&self) -> f32 {
        self.release_coeff
    }

    /// Sample rate set by the last [`prepare`](Self::prepare).
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Largest block accepted since the last [`prepare`](Self::prepare).
    pub fn max_block_size(&self) -> usize {
        self.envelope.len()
    }

    /// Envelope value carried into the next block.
    pub fn last_value(&self) -> f32 {
        self.last_value
    }

    /// Clear the carried envelope value.
    pub fn reset(&mut self) {
        self.last_value = 0.0;
    }

    /// Run the follower over one block of `[channels][frames]` audio.
    ///
    /// `frames` must not exceed the `max_block_size` given to
    /// [`prepare`](Self::prepare); this is checked in debug builds only and
    /// release builds truncate the block.
    pub fn process_block<C: AsRef<[f32]>>(&mut self, channels: &[C]) {
        let frames = match channels.first() {
            Some(first) => first.as_ref().len(),
            None => {
                self.block_len = 0;
                return;
            }
        };
        debug_assert!(
            frames <= self.envelope.len(),
            "block of {frames} frames exceeds prepared size {}",
            self.envelope.len()
        );
        let frames = frames.min(self.envelope.len());
        let detector = &mut self.detector[..frames];

        match channels {
            [mono] => {
                for (d, &x) in detector.iter_mut().zip(mono.as_ref()) {
                    *d = x.abs();
                }
            }
            [left, right, ..] => {
                for ((d, &l), &r) in detector
                    .iter_mut()
                    .zip(left.as_ref())
                    .zip(right.as_ref())
                {
                    *d = l.abs().max(r.abs());
                }
            }
            [] => {}
        }

        let envelope = &mut self.envelope[..frames];
        let attack = self.attack_coeff;
        let release = self.release_coeff;
        let mut last = self.last_value;

        if self.attack_time == 0.0 {
            for (y, &x) in envelope.iter_mut().zip(detector.iter()) {
                if last.is_nan() {
                    last = 0.0;
                }
                last = if x > last {
                    x
                } else {
                    release * last + (1.0 - release) * x
                };
                *y = last;
            }
        } else {
            for (y, &x) in envelope.iter_mut().zip(detector.iter()) {
                let coeff = if x > last { attack } else { release };
                last = coeff * last + (1.0 - coeff) * x;
                *y = last;
            }
        }

        self.last_value = last;
        self.block_len = frames;
    }

    /// Envelope value at `index` within the block just processed.
    #[inline]
    pub fn get_sample(&self, index: usize) -> f32 {
        self.envelope[index]
    }

    /// Envelope values of the block just processed.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.envelope[..self.block_len]
    }

    /// Number of frames in the block just processed.
    #[inline]
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    fn recalculate_attack(&mut self) {
        self.attack_coeff = coefficient_from_time(self.attack_time, self.sample_rate);
    }

    fn recalculate_release(&mut self) {
        self.release_coeff = coefficient_from_time(self.release_time, self.sample_rate);
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
