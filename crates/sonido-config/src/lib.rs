//! Preset persistence for the sonido reverb engine.
//!
//! - [`preset`]: the serializable [`Preset`] file format (name + full
//!   parameter snapshot) and its load/save operations.
//! - [`factory_presets`]: the four named factory presets, hard-coded as Rust
//!   constants rather than loaded from disk.
//! - [`paths`]: platform-specific preset/config directories.
//! - [`error`]: [`ConfigError`] for read/write/parse failures.
//!
//! This crate is read at CLI start and on explicit user request only — never
//! on the audio processing path.
//!
//! # Example
//!
//! ```rust,no_run
//! use sonido_config::{Preset, get_factory_preset, paths::user_presets_dir};
//!
//! let studio = get_factory_preset("studio").unwrap();
//! let path = user_presets_dir().join("studio.toml");
//! studio.save(&path).unwrap();
//!
//! let loaded = Preset::load(&path).unwrap();
//! assert_eq!(loaded.name, "Studio");
//! ```

mod error;
mod preset;

/// Platform-specific paths for presets and configuration.
pub mod paths;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use preset::{Preset, PresetParameters};
