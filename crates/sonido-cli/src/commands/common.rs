//! Shared CLI helpers used across multiple commands.

use sonido_config::{Preset, get_factory_preset, paths};
use std::path::PathBuf;

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid parameter format: '{}' (expected key=value)",
            s
        ));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

/// Load a preset by name or path.
///
/// Searches in this order:
/// 1. Factory presets (by name)
/// 2. User presets (by name)
/// 3. System presets (by name)
/// 4. File path (if it's a path to a .toml file)
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    if let Some(path) = paths::find_preset(name) {
        return Preset::load(&path).map_err(|e| anyhow::anyhow!("{}", e));
    }

    let path = PathBuf::from(name);
    if path.exists() {
        return Preset::load(&path).map_err(|e| anyhow::anyhow!("{}", e));
    }

    anyhow::bail!(
        "Preset '{}' not found. Use 'sonido-reverb-cli presets list' to see available presets.",
        name
    )
}

/// Apply every field of a parameter set to a live engine.
pub fn apply_parameters(engine: &sonido_reverb::Engine, params: &sonido_config::PresetParameters) {
    engine.set_parameter("wet_dry_mix_pct", params.wet_dry_mix_pct);
    engine.set_parameter("decay_time_s", params.decay_time_s);
    engine.set_parameter("pre_delay_s", params.pre_delay_s);
    engine.set_parameter("room_size", params.room_size);
    engine.set_parameter("density", params.density);
    engine.set_parameter("hf_damping", params.hf_damping);
    engine.set_parameter("lf_damping", params.lf_damping);
    engine.set_parameter("cross_feed_amount", params.cross_feed_amount);
    engine.set_parameter("cross_delay_ms", params.cross_delay_ms);
    engine.set_parameter("stereo_width", params.stereo_width);
    engine.set_parameter("stereo_spread", params.stereo_spread);
    engine.set_parameter("hi_cut_hz", params.hi_cut_hz);
    engine.set_parameter("lo_cut_hz", params.lo_cut_hz);
    engine.set_parameter("bypass", if params.bypass { 1.0 } else { 0.0 });
}
