//! Closed-loop automatic make-up gain state for the compressor.
//!
//! The compressor copies every block into an input ring before applying its
//! gain law and into an output ring afterwards. The ratio of the two RMS
//! levels becomes the make-up gain, ramped across the next block.
//!
//! Both rings are single-channel: channels are written one after another,
//! so the analysis window mixes all channels.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use transito_core::rms;

/// Ring length used for the RMS analysis windows.
///
/// `floor(sample_rate / max_block_size) * max_block_size`: the number of
/// whole blocks that fit into one second, times the block size.
///
/// ```rust
/// use transito_dynamics::auto_make_up::ring_size;
///
/// assert_eq!(ring_size(48000.0, 512), 93 * 512);
/// assert_eq!(ring_size(44100.0, 65536), 0);
/// ```
pub fn ring_size(sample_rate: f32, max_block_size: usize) -> usize {
    if max_block_size == 0 {
        return 0;
    }
    let blocks = libm::floorf(sample_rate / max_block_size as f32);
    if blocks.is_nan() || blocks <= 0.0 {
        return 0;
    }
    (blocks as usize).saturating_mul(max_block_size)
}

/// Ring buffers and levels for automatic make-up gain.
#[derive(Debug, Clone)]
pub(crate) struct AutoMakeUpGain {
    input_buffer: Vec<f32>,
    output_buffer: Vec<f32>,
    input_index: usize,
    output_index: usize,
    /// RMS of the input ring after the last capture
    pub(crate) input_gain: f32,
    /// RMS of the output ring after the last capture
    pub(crate) output_gain: f32,
    /// Linear make-up gain reached at the end of the previous block
    pub(crate) previous_make_up_gain: f32,
}

impl AutoMakeUpGain {
    pub(crate) fn new() -> Self {
        Self {
            input_buffer: Vec::new(),
            output_buffer: Vec::new(),
            input_index: 0,
            output_index: 0,
            input_gain: 0.0,
            output_gain: 0.0,
            previous_make_up_gain: 1.0,
        }
    }

    /// Size both rings and rewind the write positions.
    pub(crate) fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        let size = ring_size(sample_rate, max_block_size);
        self.input_buffer.clear();
        self.input_buffer.resize(size, 0.0);
        self.output_buffer.clear();
        self.output_buffer.resize(size, 0.0);
        self.input_index = 0;
        self.output_index = 0;
    }

    pub(crate) fn buffer_size(&self) -> usize {
        self.input_buffer.len()
    }

    /// Copy the unprocessed block into the input ring and measure it.
    pub(crate) fn capture_input(&mut self, buffer: &[&mut [f32]], frames: usize) -> f32 {
        copy_into_ring(&mut self.input_buffer, &mut self.input_index, buffer, frames);
        self.input_gain = rms(&self.input_buffer);
        self.input_gain
    }

    /// Copy the processed block into the output ring and measure it.
    pub(crate) fn capture_output(&mut self, buffer: &[&mut [f32]], frames: usize) -> f32 {
        copy_into_ring(&mut self.output_buffer, &mut self.output_index, buffer, frames);
        self.output_gain = rms(&self.output_buffer);
        self.output_gain
    }

    /// Linear gain that restores the input level, or unity when the output
    /// is already as loud as the input.
    pub(crate) fn target_gain(&self) -> f32 {
        if self.input_gain > 0.0 && self.input_gain > self.output_gain {
            self.input_gain / self.output_gain
        } else {
            1.0
        }
    }

    /// Zero both rings and restart the ramp from `make_up_gain`.
    pub(crate) fn reset(&mut self, make_up_gain: f32) {
        self.input_buffer.fill(0.0);
        self.output_buffer.fill(0.0);
        self.input_index = 0;
        self.output_index = 0;
        self.input_gain = 0.0;
        self.output_gain = 0.0;
        self.previous_make_up_gain = make_up_gain;
    }
}

/// Append every channel's first `frames` samples to `ring`, wrapping at its end.
fn copy_into_ring(ring: &mut [f32], index: &mut usize, buffer: &[&mut [f32]], frames: usize) {
    let size = ring.len();
    if size == 0 {
        return;
    }
    for channel in buffer {
        for &sample in &channel[..frames] {
            ring[*index] = sample;
            *index = (*index + 1) % size;
        }
    }
}
