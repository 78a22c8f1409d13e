//! Factory presets bundled with sonido-config.
//!
//! These hard-code the four named presets (`vocal_booth`, `studio`,
//! `cathedral`, `clean`) as Rust constants so they are always available
//! without loading any file from disk — this is the authoritative source,
//! mirrored from `sonido_reverb`'s own factory preset table.

use crate::preset::{Preset, PresetParameters};

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &["clean", "vocal_booth", "studio", "cathedral"];

const CLEAN_PARAMETERS: PresetParameters = PresetParameters {
    wet_dry_mix_pct: 0.0,
    decay_time_s: 0.1,
    pre_delay_s: 0.0,
    room_size: 0.0,
    density: 0.0,
    hf_damping: 0.0,
    lf_damping: 0.0,
    cross_feed_amount: 0.0,
    cross_delay_ms: 0.0,
    stereo_width: 1.0,
    stereo_spread: 1.0,
    hi_cut_hz: 20000.0,
    lo_cut_hz: 20.0,
    bypass: true,
};

const VOCAL_BOOTH_PARAMETERS: PresetParameters = PresetParameters {
    wet_dry_mix_pct: 18.0,
    decay_time_s: 0.9,
    pre_delay_s: 0.008,
    room_size: 0.3,
    density: 0.7,
    hf_damping: 0.4,
    lf_damping: 0.1,
    cross_feed_amount: 0.2,
    cross_delay_ms: 15.0,
    stereo_width: 1.0,
    stereo_spread: 1.0,
    hi_cut_hz: 20000.0,
    lo_cut_hz: 20.0,
    bypass: false,
};

const STUDIO_PARAMETERS: PresetParameters = PresetParameters {
    wet_dry_mix_pct: 40.0,
    decay_time_s: 1.7,
    pre_delay_s: 0.015,
    room_size: 0.5,
    density: 0.7,
    hf_damping: 0.4,
    lf_damping: 0.1,
    cross_feed_amount: 0.4,
    cross_delay_ms: 15.0,
    stereo_width: 1.0,
    stereo_spread: 1.0,
    hi_cut_hz: 20000.0,
    lo_cut_hz: 20.0,
    bypass: false,
};

const CATHEDRAL_PARAMETERS: PresetParameters = PresetParameters {
    wet_dry_mix_pct: 65.0,
    decay_time_s: 2.8,
    pre_delay_s: 0.025,
    room_size: 0.85,
    density: 0.8,
    hf_damping: 0.2,
    lf_damping: 0.0,
    cross_feed_amount: 0.6,
    cross_delay_ms: 15.0,
    stereo_width: 1.0,
    stereo_spread: 1.0,
    hi_cut_hz: 20000.0,
    lo_cut_hz: 20.0,
    bypass: false,
};

/// Get all factory presets in table order: `Clean`, `VocalBooth`, `Studio`,
/// `Cathedral`.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESET_NAMES
        .iter()
        .filter_map(|name| get_factory_preset(name))
        .collect()
}

/// Get a factory preset by its `sonido_reverb::Preset::name()` identifier,
/// case-insensitively. Returns `None` for `"custom"` or any unknown name.
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    match name.to_ascii_lowercase().as_str() {
        "clean" => Some(Preset::new("Clean", CLEAN_PARAMETERS).with_description("Fully bypassed")),
        "vocal_booth" | "vocalbooth" => Some(
            Preset::new("Vocal Booth", VOCAL_BOOTH_PARAMETERS)
                .with_description("Small, tight room; short decay, heavy damping"),
        ),
        "studio" => Some(
            Preset::new("Studio", STUDIO_PARAMETERS)
                .with_description("Medium room, the default-feeling reverb"),
        ),
        "cathedral" => Some(
            Preset::new("Cathedral", CATHEDRAL_PARAMETERS)
                .with_description("Large, long, airy space"),
        ),
        _ => None,
    }
}

/// Get the names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESET_NAMES.to_vec()
}

/// Check if a preset name (or display name) matches a factory preset,
/// case-insensitively.
pub fn is_factory_preset(name: &str) -> bool {
    let name_lower = name.to_lowercase();
    if FACTORY_PRESET_NAMES.iter().any(|n| *n == name_lower) {
        return true;
    }
    factory_presets()
        .iter()
        .any(|p| p.name.to_lowercase() == name_lower)
}
