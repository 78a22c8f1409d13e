//! Sonido Core - DSP primitives shared by the Sonido reverb engine and its
//! surrounding tools.
//!
//! # Core Abstractions
//!
//! ## Filters
//!
//! - [`Biquad`] - Second-order IIR filter with RBJ cookbook coefficients
//!
//! ## Delay Lines
//!
//! - [`InterpolatedDelay`] - Variable-length delay with linear interpolation
//!
//! ## Utilities
//!
//! - [`flush_denormal`] - Subnormal flushing for feedback loops
//! - [`SmoothedParam`] - One-pole parameter smoothing for zipper-free changes
//! - [`graph::StereoSamples`] - Whole-buffer stereo sample pair, the
//!   interchange type used by `sonido-io`'s WAV readers/writers
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sonido-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod delay;
pub mod graph;
pub mod math;
pub mod param;

// Re-export main types at crate root
pub use biquad::{Biquad, highpass_coefficients, lowpass_coefficients};
pub use delay::InterpolatedDelay;
pub use math::flush_denormal;
pub use param::SmoothedParam;
