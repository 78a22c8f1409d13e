//! Error types for the reverb engine boundary.

use thiserror::Error;

/// Errors returned by [`crate::Engine::create`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Sample rate or block size was out of the documented range.
    #[error("invalid engine configuration: {0}")]
    ConfigInvalid(&'static str),
}

/// Errors returned by [`crate::Engine::process_stereo`] / [`crate::Engine::process_mono`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProcessError {
    /// `n` exceeded `EngineConfig::max_block_size`.
    #[error("block of {requested} samples exceeds configured max_block_size {max}")]
    BlockTooLarge {
        /// Number of samples requested.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Stereo input/output slice lengths disagreed.
    #[error("buffer length mismatch: {0}")]
    BufferMismatch(&'static str),
}
