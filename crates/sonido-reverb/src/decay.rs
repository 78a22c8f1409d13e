//! RT60-calibrated feedback gain.
//!
//! Pure functions so the calibration math can be unit-tested without an
//! `Engine` in the loop.

use libm::powf;

/// Piecewise-linear ceiling on usable RT60 as a function of room size:
/// 8.0 s up to size 0.3, down to 6.0 s at 0.7, down to 3.0 s at 1.0.
pub fn max_rt60(room_size: f32) -> f32 {
    let size = room_size.clamp(0.0, 1.0);
    if size <= 0.3 {
        8.0
    } else if size <= 0.7 {
        let t = (size - 0.3) / (0.7 - 0.3);
        8.0 + (6.0 - 8.0) * t
    } else {
        let t = (size - 0.7) / (1.0 - 0.7);
        6.0 + (3.0 - 6.0) * t
    }
}

/// Clamp the requested decay time to the room-size ceiling, floored at 0.05s.
pub fn rt60_effective(decay_time_s: f32, room_size: f32) -> f32 {
    decay_time_s.min(max_rt60(room_size)).max(0.05)
}

/// Theoretical per-pass feedback gain for a mean delay-line round trip of
/// `avg_delay_samples` at `sample_rate_hz`, targeting `rt60_effective_s`.
pub fn g_theory(avg_delay_samples: f32, sample_rate_hz: f32, rt60_effective_s: f32) -> f32 {
    let dt = avg_delay_samples / sample_rate_hz;
    powf(10.0, -3.0 * dt / rt60_effective_s)
}

/// Frequency-compensated gain: damping removes energy per pass, so the raw
/// theoretical gain must be pushed up slightly to still hit the target RT60.
pub fn g_freq(g_theory: f32, hf_damping: f32, lf_damping: f32) -> f32 {
    g_theory * (1.0 - 0.25 * hf_damping.clamp(0.0, 1.0)) * (1.0 - 0.15 * lf_damping.clamp(0.0, 1.0))
}

/// Hard ceiling on the feedback gain so the network never exceeds unity
/// energy per round trip at larger room sizes (where the matrix couples
/// more distant delay taps).
pub fn stability_cap(room_size: f32) -> f32 {
    (0.98 - 0.03 * room_size.clamp(0.0, 1.0)).min(0.97)
}

/// Final scalar applied to every element of the freshly generated orthogonal
/// feedback matrix.
pub fn final_gain(
    avg_delay_samples: f32,
    sample_rate_hz: f32,
    decay_time_s: f32,
    room_size: f32,
    hf_damping: f32,
    lf_damping: f32,
) -> f32 {
    let rt60 = rt60_effective(decay_time_s, room_size);
    let theory = g_theory(avg_delay_samples, sample_rate_hz, rt60);
    let freq = g_freq(theory, hf_damping, lf_damping);
    freq.min(stability_cap(room_size))
}
