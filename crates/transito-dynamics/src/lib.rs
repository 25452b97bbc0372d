//! Transito Dynamics - compressor/expander and transient splitter
//!
//! Both processors implement [`DynamicsProcessor`](transito_core::DynamicsProcessor)
//! and [`ParameterInfo`](transito_core::ParameterInfo) and are built on the
//! block envelope follower from `transito-core`.
//!
//! # Processors
//!
//! - [`Compressor`] - Soft-knee compressor or downward expander with range
//!   limit and closed-loop automatic make-up gain
//! - [`TransientSplitter`] - Independent attack and sustain gains derived
//!   from three envelope followers
//!
//! # Example
//!
//! ```rust
//! use transito_core::DynamicsProcessor;
//! use transito_dynamics::{CompressionType, Compressor, TransientSplitter};
//!
//! let mut comp = Compressor::new();
//! comp.set_compression_type(CompressionType::Upward);
//! comp.set_threshold(-20.0);
//! comp.prepare(48000.0, 256);
//!
//! let mut splitter = TransientSplitter::new();
//! splitter.set_attack(1.5);
//! splitter.prepare(48000.0, 256);
//!
//! let mut left = vec![0.25f32; 256];
//! let mut right = vec![0.25f32; 256];
//! let mut buffer = [&mut left[..], &mut right[..]];
//! splitter.process_block(&mut buffer);
//! comp.process_block(&mut buffer);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod auto_make_up;
pub mod compressor;
pub mod registry;
pub mod transient_splitter;

pub use compressor::{CompressionType, Compressor, CompressorParameters};
pub use registry::{
    ProcessorDescriptor, ProcessorKind, ProcessorRegistry, create_processor,
};
pub use transient_splitter::TransientSplitter;
