//! Sonido Analysis - offline RT60 validation harness for sonido-reverb
//!
//! - [`rt60`] - RMS-envelope RT60 measurement from a captured impulse response
//!
//! ## Example
//!
//! ```rust,ignore
//! use sonido_analysis::measure_rt60;
//!
//! let ir = /* captured via Engine::generate_impulse_response */;
//! let rt60 = measure_rt60(&ir, 48000.0);
//! ```

pub mod rt60;

pub use rt60::{measure_rt60, rms_envelope};
