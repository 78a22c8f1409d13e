//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Serializable snapshot of every engine parameter (mirrors
/// `sonido_reverb::ParameterSnapshot`, minus the active-preset tag since a
/// saved preset is always loaded as `Custom`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetParameters {
    /// Host-applied wet/dry mix percentage.
    #[serde(default = "default_wet_dry_mix_pct")]
    pub wet_dry_mix_pct: f32,
    /// RT60 target in seconds.
    #[serde(default = "default_decay_time_s")]
    pub decay_time_s: f32,
    /// Pre-delay in seconds.
    #[serde(default)]
    pub pre_delay_s: f32,
    /// Room size in `[0, 1]`.
    #[serde(default = "default_half")]
    pub room_size: f32,
    /// Diffusion density in `[0, 1]`.
    #[serde(default = "default_density")]
    pub density: f32,
    /// HF damping in `[0, 1]`.
    #[serde(default)]
    pub hf_damping: f32,
    /// LF damping in `[0, 1]`.
    #[serde(default)]
    pub lf_damping: f32,
    /// Cross-feed amount in `[0, 1]`.
    #[serde(default)]
    pub cross_feed_amount: f32,
    /// Cross-feed delay in `[0, 50]` ms.
    #[serde(default)]
    pub cross_delay_ms: f32,
    /// Cross-feed (pre-reverb) mid/side width in `[0, 2]`.
    #[serde(default = "default_one")]
    pub stereo_width: f32,
    /// Post-FDN mid/side width in `[0, 2]`.
    #[serde(default = "default_one")]
    pub stereo_spread: f32,
    /// Tone filter high-cut in Hz.
    #[serde(default = "default_hi_cut_hz")]
    pub hi_cut_hz: f32,
    /// Tone filter low-cut in Hz.
    #[serde(default = "default_lo_cut_hz")]
    pub lo_cut_hz: f32,
    /// Full engine bypass.
    #[serde(default)]
    pub bypass: bool,
}

fn default_wet_dry_mix_pct() -> f32 {
    40.0
}
fn default_decay_time_s() -> f32 {
    1.7
}
fn default_half() -> f32 {
    0.5
}
fn default_density() -> f32 {
    0.7
}
fn default_one() -> f32 {
    1.0
}
fn default_hi_cut_hz() -> f32 {
    20000.0
}
fn default_lo_cut_hz() -> f32 {
    20.0
}

/// Preset file format: a named, fully-specified parameter set.
///
/// Presets are stored as TOML files. They can be loaded from files, built
/// programmatically from an engine snapshot, and saved back to disk.
///
/// # TOML Format
///
/// ```toml
/// name = "My Room"
/// description = "A custom hall tone"
///
/// [parameters]
/// decay_time_s = 2.2
/// room_size = 0.7
/// density = 0.75
/// hf_damping = 0.3
/// lf_damping = 0.05
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Full parameter set this preset applies.
    pub parameters: PresetParameters,
}

impl Preset {
    /// Create a new preset from an explicit parameter set.
    pub fn new(name: impl Into<String>, parameters: PresetParameters) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
