//! Audio I/O layer for transito.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] load and save
//!   multichannel audio as one `Vec<f32>` per channel
//! - **Chain processing**: [`ProcessingEngine`] runs a chain of
//!   [`DynamicsProcessor`](transito_core::DynamicsProcessor)s over whole
//!   signals, block by block
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use transito_io::{ProcessingEngine, read_wav, write_wav};
//! use transito_dynamics::Compressor;
//!
//! let (mut channels, spec) = read_wav("input.wav")?;
//!
//! let mut engine = ProcessingEngine::new(spec.sample_rate as f32, 512);
//! engine.add_processor(Compressor::new());
//! engine.process_channels(&mut channels)?;
//!
//! write_wav("output.wav", &channels, spec)?;
//! # Ok::<(), transito_io::Error>(())
//! ```

mod engine;
mod wav;

pub use engine::ProcessingEngine;
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Channel count or channel lengths do not line up.
    #[error("Channel mismatch: expected {expected}, found {found}")]
    ChannelMismatch {
        /// Expected channel count or frame count.
        expected: usize,
        /// Actual channel count or frame count.
        found: usize,
    },
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
