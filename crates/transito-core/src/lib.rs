//! Transito Core - envelope following and block-processing primitives
//!
//! This crate provides the building blocks shared by the transito dynamics
//! processors, designed for real-time audio with zero allocation in the
//! audio path.
//!
//! # Core Abstractions
//!
//! - [`Envelope`] - Block-based attack/release envelope follower
//! - [`DynamicsProcessor`] - Object-safe `prepare` / `process_block` trait
//! - [`ParameterInfo`] - Runtime parameter discovery for presets and the CLI
//! - [`ProcessorWithParams`] - Both of the above behind one trait object
//!
//! ## Utilities
//!
//! - Level conversions: [`db_to_linear`], [`linear_to_db`]
//! - Block helpers: [`rms`], [`apply_gain_ramp`], [`coefficient_from_time`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for the envelope
//! buffers). Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! transito-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use transito_core::{Envelope, linear_to_db};
//!
//! let mut env = Envelope::with_times(0.0, 0.2);
//! env.prepare(48000.0, 64);
//!
//! let left = [0.5f32; 64];
//! let right = [0.25f32; 64];
//! env.process_block(&[&left[..], &right[..]]);
//!
//! assert!((linear_to_db(env.get_sample(0)) - (-6.02)).abs() < 0.01);
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: buffers are sized in `prepare`, never in `process_block`
//! - **Permissive numerics**: out-of-range parameters degrade, they never panic
//! - **Object-safe traits**: processors can be chained behind `Box<dyn _>`

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod envelope;
pub mod math;
pub mod param_info;
pub mod processor;
pub mod processor_with_params;

// Re-export main types at crate root
pub use envelope::Envelope;
pub use math::{apply_gain_ramp, coefficient_from_time, db_to_linear, linear_to_db, rms};
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
pub use processor::DynamicsProcessor;
pub use processor_with_params::ProcessorWithParams;
