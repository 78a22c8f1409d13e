//! Per-line damping: a lowpass (HF damping) cascaded with a highpass (LF damping).

use sonido_core::{Biquad, highpass_coefficients, lowpass_coefficients};

const Q_BUTTERWORTH: f32 = core::f32::consts::SQRT_2 / 2.0;

/// HF lowpass + LF highpass cascade applied to each FDN line's feedback path.
#[derive(Debug, Clone)]
pub struct DampingFilter {
    lowpass: Biquad,
    highpass: Biquad,
    hf_cutoff_hz: f32,
    lf_cutoff_hz: f32,
    sample_rate: f32,
}

impl DampingFilter {
    /// Build a damping filter for the given sample rate, with zero damping
    /// (both stages identity).
    pub fn new(sample_rate: f32) -> Self {
        let mut f = Self {
            lowpass: Biquad::new(),
            highpass: Biquad::new(),
            hf_cutoff_hz: 12000.0,
            lf_cutoff_hz: 50.0,
            sample_rate,
        };
        f.set_damping(0.0, 0.0);
        f
    }

    /// Recompute coefficients for HF/LF damping percentages in `[0, 1]`.
    ///
    /// `hf_cutoff_hz = 12000 - 11000*hf`, `lf_cutoff_hz = 50 + 450*lf`;
    /// numerator b-coefficients are scaled by `1 - 0.8*hf` (lowpass) and
    /// `1 - 0.6*lf` (highpass) so damping = 0 degenerates to identity.
    pub fn set_damping(&mut self, hf_damping: f32, lf_damping: f32) {
        let hf = hf_damping.clamp(0.0, 1.0);
        let lf = lf_damping.clamp(0.0, 1.0);

        self.hf_cutoff_hz = 12000.0 - 11000.0 * hf;
        self.lf_cutoff_hz = 50.0 + 450.0 * lf;

        if hf <= 0.0 {
            self.lowpass.set_coefficients(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        } else {
            let (b0, b1, b2, a0, a1, a2) =
                lowpass_coefficients(self.hf_cutoff_hz, Q_BUTTERWORTH, self.sample_rate);
            let scale = 1.0 - 0.8 * hf;
            self.lowpass
                .set_coefficients(b0 * scale, b1 * scale, b2 * scale, a0, a1, a2);
        }

        if lf <= 0.0 {
            self.highpass.set_coefficients(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        } else {
            let (b0, b1, b2, a0, a1, a2) =
                highpass_coefficients(self.lf_cutoff_hz, Q_BUTTERWORTH, self.sample_rate);
            let scale = 1.0 - 0.6 * lf;
            self.highpass
                .set_coefficients(b0 * scale, b1 * scale, b2 * scale, a0, a1, a2);
        }
    }

    /// Update the sample rate and recompute coefficients at the last-set
    /// damping percentages' equivalent cutoffs.
    pub fn set_sample_rate(&mut self, sample_rate: f32, hf_damping: f32, lf_damping: f32) {
        self.sample_rate = sample_rate;
        self.set_damping(hf_damping, lf_damping);
    }

    /// `highpass(lowpass(x))`.
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        self.highpass.process(self.lowpass.process(x))
    }

    /// Clear both biquad histories.
    pub fn clear(&mut self) {
        self.lowpass.clear();
        self.highpass.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_damping_is_identity() {
        let mut f = DampingFilter::new(48000.0);
        for i in 0..32 {
            let x = (i as f32 * 0.1).sin();
            assert!((f.process(x) - x).abs() < 1e-4);
        }
    }

    #[test]
    fn damping_attenuates_steady_state() {
        let mut identity = DampingFilter::new(48000.0);
        let mut damped = DampingFilter::new(48000.0);
        damped.set_damping(0.8, 0.0);

        let mut out_identity = 0.0;
        let mut out_damped = 0.0;
        for _ in 0..2000 {
            out_identity = identity.process(1.0);
            out_damped = damped.process(1.0);
        }
        assert!(out_damped < out_identity);
    }

    #[test]
    fn clear_resets_history() {
        let mut f = DampingFilter::new(48000.0);
        f.set_damping(0.5, 0.5);
        for _ in 0..16 {
            f.process(1.0);
        }
        f.clear();
        let first = f.process(0.0);
        assert_eq!(first, 0.0);
    }
}
