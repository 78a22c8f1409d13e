//! Engine construction-time configuration. Immutable once built;
//! changing any of these fields means tearing down and recreating the
//! `Engine`, which discards all state.

use crate::error::EngineError;

/// Maximum pre-delay time the engine will ever need to buffer, in seconds.
pub const MAX_PRE_DELAY_S: f32 = 0.2;

/// Default number of FDN delay lines.
pub const DEFAULT_NUM_LINES: u32 = 8;

/// Immutable engine configuration, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Sample rate in Hz, `[44100, 96000]`.
    pub sample_rate_hz: f32,
    /// Largest block `process_*` will ever be called with.
    pub max_block_size: u32,
    /// Number of FDN delay lines, clamped to `[4, 12]`.
    pub num_delay_lines: u32,
}

impl EngineConfig {
    /// Validate and build a config. Fails only on sample-rate or
    /// block-size range violations; `num_lines` is clamped, not
    /// rejected.
    pub fn new(sample_rate_hz: f32, max_block_size: u32, num_lines: u32) -> Result<Self, EngineError> {
        if !(44100.0..=96000.0).contains(&sample_rate_hz) {
            return Err(EngineError::ConfigInvalid(
                "sample_rate_hz must be in [44100, 96000]",
            ));
        }
        if max_block_size < 64 {
            return Err(EngineError::ConfigInvalid(
                "max_block_size must be >= 64",
            ));
        }
        Ok(Self {
            sample_rate_hz,
            max_block_size,
            num_delay_lines: num_lines.clamp(4, 12),
        })
    }

    /// Convenience constructor using the default line count (8).
    pub fn with_defaults(sample_rate_hz: f32, max_block_size: u32) -> Result<Self, EngineError> {
        Self::new(sample_rate_hz, max_block_size, DEFAULT_NUM_LINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_sample_rate() {
        assert!(EngineConfig::new(8000.0, 512, 8).is_err());
        assert!(EngineConfig::new(192000.0, 512, 8).is_err());
    }

    #[test]
    fn rejects_tiny_block_size() {
        assert!(EngineConfig::new(48000.0, 32, 8).is_err());
    }

    #[test]
    fn clamps_num_lines_instead_of_rejecting() {
        let cfg = EngineConfig::new(48000.0, 512, 99).unwrap();
        assert_eq!(cfg.num_delay_lines, 12);
        let cfg = EngineConfig::new(48000.0, 512, 1).unwrap();
        assert_eq!(cfg.num_delay_lines, 4);
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(EngineConfig::new(44100.0, 64, 8).is_ok());
        assert!(EngineConfig::new(96000.0, 4096, 8).is_ok());
    }
}
