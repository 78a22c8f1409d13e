//! Factory preset table and the [`Preset`] selector.

/// One of the four named presets, or `Custom` to leave the current
/// parameter values untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Fully bypassed: wet output is always zero.
    Clean,
    /// Small, tight room; short decay, heavy damping.
    VocalBooth,
    /// Medium room, the default-feeling reverb.
    Studio,
    /// Large, long, airy space.
    Cathedral,
    /// Parameters set individually by the host.
    #[default]
    Custom,
}

/// Concrete values a named preset forces onto the parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetValues {
    /// Suggested wet/dry mix percentage (applied by the host).
    pub wet_dry_mix_pct: f32,
    /// Decay time (RT60) target in seconds.
    pub decay_time_s: f32,
    /// Pre-delay in seconds.
    pub pre_delay_s: f32,
    /// Cross-feed amount in `[0, 1]`.
    pub cross_feed_amount: f32,
    /// Room size in `[0, 1]`.
    pub room_size: f32,
    /// Diffusion density in `[0, 1]`.
    pub density: f32,
    /// HF damping amount in `[0, 1]`.
    pub hf_damping: f32,
    /// LF damping amount in `[0, 1]`.
    pub lf_damping: f32,
    /// Whether the engine should fully bypass (force-silent wet output).
    pub bypass: bool,
}

/// `VocalBooth` factory values.
pub const VOCAL_BOOTH: PresetValues = PresetValues {
    wet_dry_mix_pct: 18.0,
    decay_time_s: 0.9,
    pre_delay_s: 0.008,
    cross_feed_amount: 0.2,
    room_size: 0.3,
    density: 0.7,
    hf_damping: 0.4,
    lf_damping: 0.1,
    bypass: false,
};

/// `Studio` factory values.
pub const STUDIO: PresetValues = PresetValues {
    wet_dry_mix_pct: 40.0,
    decay_time_s: 1.7,
    pre_delay_s: 0.015,
    cross_feed_amount: 0.4,
    room_size: 0.5,
    density: 0.7,
    hf_damping: 0.4,
    lf_damping: 0.1,
    bypass: false,
};

/// `Cathedral` factory values.
pub const CATHEDRAL: PresetValues = PresetValues {
    wet_dry_mix_pct: 65.0,
    decay_time_s: 2.8,
    pre_delay_s: 0.025,
    cross_feed_amount: 0.6,
    room_size: 0.85,
    density: 0.8,
    hf_damping: 0.2,
    lf_damping: 0.0,
    bypass: false,
};

/// `Clean` forces full bypass; the other fields are irrelevant since the
/// wet output is zero regardless, but are given harmless
/// defaults for introspection.
pub const CLEAN: PresetValues = PresetValues {
    wet_dry_mix_pct: 0.0,
    decay_time_s: 0.1,
    pre_delay_s: 0.0,
    cross_feed_amount: 0.0,
    room_size: 0.0,
    density: 0.0,
    hf_damping: 0.0,
    lf_damping: 0.0,
    bypass: true,
};

impl Preset {
    /// Factory values for this preset, or `None` for `Custom` (meaning:
    /// leave whatever is currently configured untouched).
    pub fn values(self) -> Option<PresetValues> {
        match self {
            Preset::Clean => Some(CLEAN),
            Preset::VocalBooth => Some(VOCAL_BOOTH),
            Preset::Studio => Some(STUDIO),
            Preset::Cathedral => Some(CATHEDRAL),
            Preset::Custom => None,
        }
    }

    /// Name as used by `set_parameter`/CLI/config lookups.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Clean => "clean",
            Preset::VocalBooth => "vocal_booth",
            Preset::Studio => "studio",
            Preset::Cathedral => "cathedral",
            Preset::Custom => "custom",
        }
    }

    /// Parse a preset by its `name()`, case-insensitively.
    pub fn parse(name: &str) -> Option<Preset> {
        match name.to_ascii_lowercase().as_str() {
            "clean" => Some(Preset::Clean),
            "vocal_booth" | "vocalbooth" => Some(Preset::VocalBooth),
            "studio" => Some(Preset::Studio),
            "cathedral" => Some(Preset::Cathedral),
            "custom" => Some(Preset::Custom),
            _ => None,
        }
    }

    /// All four named presets plus `Custom`, in table order.
    pub const ALL: [Preset; 5] = [
        Preset::Clean,
        Preset::VocalBooth,
        Preset::Studio,
        Preset::Cathedral,
        Preset::Custom,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_forces_bypass() {
        assert!(Preset::Clean.values().unwrap().bypass);
    }

    #[test]
    fn custom_has_no_forced_values() {
        assert!(Preset::Custom.values().is_none());
    }

    #[test]
    fn name_roundtrips() {
        for p in Preset::ALL {
            assert_eq!(Preset::parse(p.name()), Some(p));
        }
    }
}
