//! Block-processing trait shared by the dynamics processors.
//!
//! ## Design Decisions
//!
//! - **Blocks, not samples**: the envelope is computed for a whole block
//!   before any gain is applied, and automatic make-up gain is measured per
//!   block, so the unit of work is a `[channels][frames]` buffer.
//!
//! - **Object-safe**: `Box<dyn DynamicsProcessor>` is used by the processing
//!   engine to run a chain chosen at runtime.
//!
//! - **No allocations**: [`process_block`](DynamicsProcessor::process_block)
//!   runs on the audio thread. All buffers are sized by
//!   [`prepare`](DynamicsProcessor::prepare).

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// Core trait for block-based dynamics processors.
///
/// # Example
///
/// ```rust
/// use transito_core::DynamicsProcessor;
///
/// struct Gain(f32);
///
/// impl DynamicsProcessor for Gain {
///     fn prepare(&mut self, _sample_rate: f32, _max_block_size: usize) {}
///
///     fn process_block(&mut self, buffer: &mut [&mut [f32]]) {
///         for channel in buffer.iter_mut() {
///             for sample in channel.iter_mut() {
///                 *sample *= self.0;
///             }
///         }
///     }
///
///     fn reset(&mut self) {}
/// }
///
/// let mut gain = Gain(0.5);
/// let mut left = [1.0f32, 1.0];
/// let mut right = [2.0f32, 2.0];
/// gain.process_block(&mut [&mut left[..], &mut right[..]]);
/// assert_eq!(right, [1.0, 1.0]);
/// ```
pub trait DynamicsProcessor {
    /// Set the sample rate and the largest block that will be processed.
    ///
    /// Call before the first [`process_block`](Self::process_block) and again
    /// whenever either value changes. Not safe to call concurrently with
    /// processing.
    fn prepare(&mut self, sample_rate: f32, max_block_size: usize);

    /// Process one block of `[channels][frames]` audio in place.
    ///
    /// Every channel must have the same length, no greater than the
    /// `max_block_size` passed to [`prepare`](Self::prepare).
    fn process_block(&mut self, buffer: &mut [&mut [f32]]);

    /// Clear signal history without changing parameters.
    fn reset(&mut self);

    /// Processing latency in samples. Dynamics processors here have none.
    fn latency_samples(&self) -> usize {
        0
    }
}

impl<P: DynamicsProcessor + ?Sized> DynamicsProcessor for Box<P> {
    fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        (**self).prepare(sample_rate, max_block_size);
    }

    fn process_block(&mut self, buffer: &mut [&mut [f32]]) {
        (**self).process_block(buffer);
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn latency_samples(&self) -> usize {
        (**self).latency_samples()
    }
}
