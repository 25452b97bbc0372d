//! Processor chain engine.

use crate::{Error, Result};
use transito_core::DynamicsProcessor;

struct Slot {
    processor: Box<dyn DynamicsProcessor + Send>,
    bypassed: bool,
}

/// Processing engine that runs a chain of processors over multichannel audio.
///
/// Every processor is prepared with the engine's sample rate and maximum
/// block size when it is added; whole signals are cut into blocks no longer
/// than that size. The engine uses `Send` bounds so it can be moved to a
/// worker thread.
pub struct ProcessingEngine {
    chain: Vec<Slot>,
    sample_rate: f32,
    max_block_size: usize,
}

impl ProcessingEngine {
    /// Create an empty engine. A `max_block_size` of zero is raised to one.
    pub fn new(sample_rate: f32, max_block_size: usize) -> Self {
        Self {
            chain: Vec::new(),
            sample_rate,
            max_block_size: max_block_size.max(1),
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Largest block handed to a processor.
    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    /// Re-prepare every processor for a new sample rate and block size.
    pub fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        self.sample_rate = sample_rate;
        self.max_block_size = max_block_size.max(1);
        for slot in &mut self.chain {
            slot.processor.prepare(self.sample_rate, self.max_block_size);
        }
    }

    /// Prepare a processor and append it to the chain. Returns its index.
    pub fn add_processor<P>(&mut self, mut processor: P) -> usize
    where
        P: DynamicsProcessor + Send + 'static,
    {
        processor.prepare(self.sample_rate, self.max_block_size);
        self.chain.push(Slot {
            processor: Box::new(processor),
            bypassed: false,
        });
        self.chain.len() - 1
    }

    /// Bypass or re-enable the processor at `index`. Out-of-range indices are ignored.
    pub fn set_bypassed(&mut self, index: usize, bypassed: bool) {
        if let Some(slot) = self.chain.get_mut(index) {
            slot.bypassed = bypassed;
        }
    }

    /// Whether the processor at `index` is bypassed.
    pub fn is_bypassed(&self, index: usize) -> bool {
        self.chain.get(index).is_some_and(|slot| slot.bypassed)
    }

    /// Remove every processor.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Number of processors in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Total latency of the active processors in samples.
    pub fn latency_samples(&self) -> usize {
        self.active().map(|slot| slot.processor.latency_samples()).sum()
    }

    /// Reset every processor.
    pub fn reset(&mut self) {
        for slot in &mut self.chain {
            slot.processor.reset();
        }
    }

    /// Run one block through the active processors in chain order.
    ///
    /// The block must not be longer than [`max_block_size`](Self::max_block_size).
    pub fn process_block(&mut self, buffer: &mut [&mut [f32]]) {
        for slot in self.chain.iter_mut().filter(|slot| !slot.bypassed) {
            slot.processor.process_block(buffer);
        }
    }

    /// Process whole channels in place, block by block.
    pub fn process_channels(&mut self, channels: &mut [Vec<f32>]) -> Result<()> {
        self.process_channels_with_progress(channels, |_| {})
    }

    /// Process whole channels in place, reporting the frames done after each block.
    ///
    /// All channels must have the same length.
    pub fn process_channels_with_progress<F>(
        &mut self,
        channels: &mut [Vec<f32>],
        mut on_block: F,
    ) -> Result<()>
    where
        F: FnMut(usize),
    {
        let frames = channels.first().map_or(0, Vec::len);
        if let Some(bad) = channels.iter().find(|c| c.len() != frames) {
            return Err(Error::ChannelMismatch {
                expected: frames,
                found: bad.len(),
            });
        }

        tracing::debug!(
            channels = channels.len(),
            frames,
            block = self.max_block_size,
            processors = self.chain.len(),
            "processing"
        );

        let mut start = 0;
        while start < frames {
            let end = (start + self.max_block_size).min(frames);
            let mut block: Vec<&mut [f32]> = channels
                .iter_mut()
                .map(|channel| &mut channel[start..end])
                .collect();
            self.process_block(&mut block);
            on_block(end);
            start = end;
        }
        Ok(())
    }

    fn active(&self) -> impl Iterator<Item = &Slot> {
        self.chain.iter().filter(|slot| !slot.bypassed)
    }
}
