//! Lock-free parameter store shared between the processing thread and any
//! number of control threads.
//!
//! Each field is an `AtomicU32` carrying an `f32`'s bit pattern
//! (`f32::to_bits`/`from_bits`), written with `Ordering::Release` by control
//! threads and read with `Ordering::Acquire` once per block by the
//! processing thread — the same encoding this workspace's GUI/audio bridge
//! uses for float parameters shared across a thread boundary, generalized
//! here to a plain struct of atomics.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::preset::Preset;

#[inline]
fn store_f32(slot: &AtomicU32, value: f32) {
    slot.store(value.to_bits(), Ordering::Release);
}

#[inline]
fn load_f32(slot: &AtomicU32) -> f32 {
    f32::from_bits(slot.load(Ordering::Acquire))
}

/// Immutable copy of every parameter's current value, taken once at block
/// start by the processing thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSnapshot {
    /// Host-applied wet/dry mix percentage (engine does not apply this
    /// itself — exposed for the smoother/host convenience).
    pub wet_dry_mix_pct: f32,
    /// RT60 target in seconds.
    pub decay_time_s: f32,
    /// Pre-delay in seconds.
    pub pre_delay_s: f32,
    /// Room size in `[0, 1]`.
    pub room_size: f32,
    /// Diffusion density in `[0, 1]`.
    pub density: f32,
    /// HF damping in `[0, 1]`.
    pub hf_damping: f32,
    /// LF damping in `[0, 1]`.
    pub lf_damping: f32,
    /// Cross-feed amount in `[0, 1]`.
    pub cross_feed_amount: f32,
    /// Cross-feed delay in `[0, 50]` ms.
    pub cross_delay_ms: f32,
    /// Cross-feed (pre-reverb) mid/side width in `[0, 2]`.
    pub stereo_width: f32,
    /// Post-FDN mid/side width in `[0, 2]`.
    pub stereo_spread: f32,
    /// Tone filter high-cut in Hz.
    pub hi_cut_hz: f32,
    /// Tone filter low-cut in Hz.
    pub lo_cut_hz: f32,
    /// Active preset.
    pub preset: Preset,
    /// Full engine bypass.
    pub bypass: bool,
}

/// Lock-free parameter store. See module docs for the ordering contract.
#[derive(Debug)]
pub struct Parameters {
    wet_dry_mix_pct: AtomicU32,
    decay_time_s: AtomicU32,
    pre_delay_s: AtomicU32,
    room_size: AtomicU32,
    density: AtomicU32,
    hf_damping: AtomicU32,
    lf_damping: AtomicU32,
    cross_feed_amount: AtomicU32,
    cross_delay_ms: AtomicU32,
    stereo_width: AtomicU32,
    stereo_spread: AtomicU32,
    hi_cut_hz: AtomicU32,
    lo_cut_hz: AtomicU32,
    preset: AtomicU32,
    bypass: AtomicBool,
}

fn preset_to_u32(p: Preset) -> u32 {
    match p {
        Preset::Clean => 0,
        Preset::VocalBooth => 1,
        Preset::Studio => 2,
        Preset::Cathedral => 3,
        Preset::Custom => 4,
    }
}

fn preset_from_u32(v: u32) -> Preset {
    match v {
        0 => Preset::Clean,
        1 => Preset::VocalBooth,
        2 => Preset::Studio,
        3 => Preset::Cathedral,
        _ => Preset::Custom,
    }
}

impl Parameters {
    /// Default Studio-ish Custom parameter set, unbypassed.
    pub fn new() -> Self {
        let p = Self {
            wet_dry_mix_pct: AtomicU32::new(0),
            decay_time_s: AtomicU32::new(0),
            pre_delay_s: AtomicU32::new(0),
            room_size: AtomicU32::new(0),
            density: AtomicU32::new(0),
            hf_damping: AtomicU32::new(0),
            lf_damping: AtomicU32::new(0),
            cross_feed_amount: AtomicU32::new(0),
            cross_delay_ms: AtomicU32::new(0),
            stereo_width: AtomicU32::new(0),
            stereo_spread: AtomicU32::new(0),
            hi_cut_hz: AtomicU32::new(0),
            lo_cut_hz: AtomicU32::new(0),
            preset: AtomicU32::new(preset_to_u32(Preset::Studio)),
            bypass: AtomicBool::new(false),
        };
        store_f32(&p.wet_dry_mix_pct, 40.0);
        store_f32(&p.decay_time_s, 1.7);
        store_f32(&p.pre_delay_s, 0.015);
        store_f32(&p.room_size, 0.5);
        store_f32(&p.density, 0.7);
        store_f32(&p.hf_damping, 0.4);
        store_f32(&p.lf_damping, 0.1);
        store_f32(&p.cross_feed_amount, 0.4);
        store_f32(&p.cross_delay_ms, 15.0);
        store_f32(&p.stereo_width, 1.0);
        store_f32(&p.stereo_spread, 1.0);
        store_f32(&p.hi_cut_hz, 20000.0);
        store_f32(&p.lo_cut_hz, 20.0);
        p
    }

    /// Take a consistent snapshot for use at the start of a block. Intra-block
    /// consistency across fields is not guaranteed — each field is an
    /// independently-ordered atomic word.
    pub fn snapshot(&self) -> ParameterSnapshot {
        ParameterSnapshot {
            wet_dry_mix_pct: load_f32(&self.wet_dry_mix_pct),
            decay_time_s: load_f32(&self.decay_time_s),
            pre_delay_s: load_f32(&self.pre_delay_s),
            room_size: load_f32(&self.room_size),
            density: load_f32(&self.density),
            hf_damping: load_f32(&self.hf_damping),
            lf_damping: load_f32(&self.lf_damping),
            cross_feed_amount: load_f32(&self.cross_feed_amount),
            cross_delay_ms: load_f32(&self.cross_delay_ms),
            stereo_width: load_f32(&self.stereo_width),
            stereo_spread: load_f32(&self.stereo_spread),
            hi_cut_hz: load_f32(&self.hi_cut_hz),
            lo_cut_hz: load_f32(&self.lo_cut_hz),
            preset: preset_from_u32(self.preset.load(Ordering::Acquire)),
            bypass: self.bypass.load(Ordering::Acquire),
        }
    }

    /// Set a single named parameter. The value is range-clamped to the
    /// documented bounds; unknown names are ignored, matching the
    /// "out-of-range parameters are clamped, not rejected" contract —
    /// there is no error return at this boundary.
    pub fn set(&self, name: &str, value: f32) {
        match name {
            "wet_dry_mix_pct" => store_f32(&self.wet_dry_mix_pct, value.clamp(0.0, 100.0)),
            "decay_time_s" => store_f32(&self.decay_time_s, value.clamp(0.1, 8.0)),
            "pre_delay_s" => store_f32(&self.pre_delay_s, value.clamp(0.0, 0.2)),
            "room_size" => store_f32(&self.room_size, value.clamp(0.0, 1.0)),
            "density" => store_f32(&self.density, value.clamp(0.0, 1.0)),
            "hf_damping" => store_f32(&self.hf_damping, value.clamp(0.0, 1.0)),
            "lf_damping" => store_f32(&self.lf_damping, value.clamp(0.0, 1.0)),
            "cross_feed_amount" => store_f32(&self.cross_feed_amount, value.clamp(0.0, 1.0)),
            "cross_delay_ms" => store_f32(&self.cross_delay_ms, value.clamp(0.0, 50.0)),
            "stereo_width" => store_f32(&self.stereo_width, value.clamp(0.0, 2.0)),
            "stereo_spread" => store_f32(&self.stereo_spread, value.clamp(0.0, 2.0)),
            "hi_cut_hz" => store_f32(&self.hi_cut_hz, value.clamp(1000.0, 20000.0)),
            "lo_cut_hz" => store_f32(&self.lo_cut_hz, value.clamp(20.0, 1000.0)),
            "bypass" => self.bypass.store(value != 0.0, Ordering::Release),
            _ => {}
        }
    }

    /// Bulk-apply a preset. `Custom` only changes the `preset` tag, leaving
    /// every other field untouched so the host's prior manual edits survive.
    pub fn apply_preset(&self, preset: Preset) {
        self.preset.store(preset_to_u32(preset), Ordering::Release);
        if let Some(v) = preset.values() {
            store_f32(&self.wet_dry_mix_pct, v.wet_dry_mix_pct);
            store_f32(&self.decay_time_s, v.decay_time_s);
            store_f32(&self.pre_delay_s, v.pre_delay_s);
            store_f32(&self.cross_feed_amount, v.cross_feed_amount);
            store_f32(&self.room_size, v.room_size);
            store_f32(&self.density, v.density);
            store_f32(&self.hf_damping, v.hf_damping);
            store_f32(&self.lf_damping, v.lf_damping);
            self.bypass.store(v.bypass, Ordering::Release);
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_writes_clamp() {
        let p = Parameters::new();
        p.set("room_size", 5.0);
        assert_eq!(p.snapshot().room_size, 1.0);
        p.set("room_size", -5.0);
        assert_eq!(p.snapshot().room_size, 0.0);
    }

    #[test]
    fn decay_time_clamps_to_documented_range() {
        let p = Parameters::new();
        p.set("decay_time_s", 100.0);
        assert_eq!(p.snapshot().decay_time_s, 8.0);
        p.set("decay_time_s", 0.0);
        assert_eq!(p.snapshot().decay_time_s, 0.1);
    }

    #[test]
    fn apply_preset_clean_forces_bypass() {
        let p = Parameters::new();
        p.apply_preset(Preset::Clean);
        let snap = p.snapshot();
        assert!(snap.bypass);
        assert_eq!(snap.preset, Preset::Clean);
    }

    #[test]
    fn apply_preset_custom_preserves_other_fields() {
        let p = Parameters::new();
        p.set("room_size", 0.42);
        p.apply_preset(Preset::Custom);
        let snap = p.snapshot();
        assert_eq!(snap.preset, Preset::Custom);
        assert_eq!(snap.room_size, 0.42);
    }

    #[test]
    fn unknown_parameter_name_is_ignored() {
        let p = Parameters::new();
        let before = p.snapshot();
        p.set("not_a_real_parameter", 1.0);
        assert_eq!(p.snapshot(), before);
    }
}
