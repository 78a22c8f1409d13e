//! Prime delay tables and their scaling rules.

/// FDN line base delays in samples at 48 kHz. Scaled at line-setup time by
/// `sr/48000 * (0.5 + 1.5*room_size)`, then clamped to `[200, max_delay-1]`,
/// with a `±(i mod 3) - 1` sample variation applied for `i > 0` to break up
/// exact harmonic relationships between lines.
pub const LINE_PRIMES_48K: [u32; 20] = [
    1447, 1549, 1693, 1789, 1907, 2063, 2179, 2311, 2467, 2633, 2801, 2969, 3137, 3307, 3491, 3677,
    3863, 4051, 4241, 4801,
];

/// Early-reflection all-pass delays in samples at 48 kHz, scaled by
/// `sr/48000 * (0.3 + 0.7*room_size)` and clamped to `[10, 2400]`.
pub const EARLY_REFLECTION_PRIMES_48K: [u32; 8] = [241, 317, 431, 563, 701, 857, 997, 1151];

/// Gain for early-reflection stage `i`: `0.75 - 0.05*i`.
pub fn early_reflection_gain(i: usize) -> f32 {
    0.75 - 0.05 * i as f32
}

/// Diffusion all-pass delays in samples (fixed, not sample-rate scaled).
pub const DIFFUSION_PRIMES: [u32; 8] = [89, 109, 127, 149, 167, 191, 211, 233];

/// Diffusion stage `i`'s gain: `min(0.7 - 0.03*i, 0.5 + 0.3*density)`.
pub fn diffusion_gain(i: usize, density: f32) -> f32 {
    let base = 0.7 - 0.03 * i as f32;
    let ceiling = 0.5 + 0.3 * density.clamp(0.0, 1.0);
    base.min(ceiling)
}

/// Scale and clamp an FDN line's base 48kHz delay for the given sample rate
/// and room size, applying the `i > 0` de-correlation variation.
pub fn scaled_line_delay(i: usize, sample_rate_hz: f32, room_size: f32, max_delay: f32) -> f32 {
    let base = LINE_PRIMES_48K[i % LINE_PRIMES_48K.len()] as f32;
    let scale = (sample_rate_hz / 48000.0) * (0.5 + 1.5 * room_size.clamp(0.0, 1.0));
    let mut delay = base * scale;
    if i > 0 {
        delay += (i % 3) as f32 - 1.0;
    }
    delay.clamp(200.0, max_delay)
}

/// Scale and clamp an early-reflection stage's base 48kHz delay.
pub fn scaled_early_reflection_delay(i: usize, sample_rate_hz: f32, room_size: f32) -> f32 {
    let base = EARLY_REFLECTION_PRIMES_48K[i % EARLY_REFLECTION_PRIMES_48K.len()] as f32;
    let scale = (sample_rate_hz / 48000.0) * (0.3 + 0.7 * room_size.clamp(0.0, 1.0));
    (base * scale).clamp(10.0, 2400.0)
}
