//! Sonido Reverb - real-time feedback delay network reverb engine
//!
//! Pre-delay, a tapped early-reflection all-pass chain, a Schröeder
//! diffusion cascade, and an N-line FDN core coupled by an orthogonal
//! Householder feedback matrix, with cross-feed, stereo width, and tone
//! shaping on the wet output. Parameters are updated lock-free from any
//! control thread via [`Parameters`] and read once per block by the
//! processing thread (see [`parameters`] for the ordering contract).
//!
//! ## Example
//!
//! ```rust,ignore
//! use sonido_reverb::{Engine, Preset};
//!
//! let mut engine = Engine::create(48000.0, 512, 8)?;
//! engine.apply_preset(Preset::Cathedral);
//!
//! let input = vec![0.0_f32; 512];
//! let mut output = vec![0.0_f32; 512];
//! engine.process_mono(&input, &mut output, 512)?;
//! # Ok::<(), sonido_reverb::EngineError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod allpass;
pub mod config;
pub mod constants;
pub mod cross_feed;
pub mod damping;
pub mod decay;
pub mod delay_line;
pub mod engine;
pub mod error;
pub mod feedback_matrix;
pub mod parameters;
pub mod preset;
pub mod room_size_guard;
pub mod stereo_spread;
pub mod tone_filter;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, ProcessError};
pub use feedback_matrix::FeedbackMatrix;
pub use parameters::{ParameterSnapshot, Parameters};
pub use preset::{Preset, PresetValues};
