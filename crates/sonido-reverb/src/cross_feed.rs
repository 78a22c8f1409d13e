//! Stereo cross-feed pre-mix applied to the dry input before reverberation:
//! delayed, amount-scaled cross-talk between channels, followed by a
//! mid/side width pass.

use crate::delay_line::DelayLine;

/// Max cross-feed delay in milliseconds.
pub const MAX_CROSS_DELAY_MS: f32 = 50.0;

/// Cross-feed pre-mix state: one delay line per channel plus the width/phase
/// controls.
#[derive(Debug, Clone)]
pub struct CrossFeedState {
    amount: f32,
    cross_delay_ms: f32,
    width: f32,
    phase_invert: bool,
    bypass: bool,
    sample_rate: f32,
    delay_l: DelayLine,
    delay_r: DelayLine,
}

impl CrossFeedState {
    /// Build cross-feed state for the given sample rate, with amount=0 and
    /// width=1 (transparent).
    pub fn new(sample_rate: f32) -> Self {
        let max_samples = (sample_rate * MAX_CROSS_DELAY_MS / 1000.0) as usize + 2;
        Self {
            amount: 0.0,
            cross_delay_ms: 15.0,
            width: 1.0,
            phase_invert: false,
            bypass: false,
            sample_rate,
            delay_l: DelayLine::new(max_samples),
            delay_r: DelayLine::new(max_samples),
        }
    }

    /// Cross-feed amount in `[0, 1]`.
    pub fn set_amount(&mut self, amount: f32) {
        self.amount = amount.clamp(0.0, 1.0);
    }

    /// Cross-delay time in `[0, 50]` ms.
    pub fn set_cross_delay_ms(&mut self, ms: f32) {
        self.cross_delay_ms = ms.clamp(0.0, MAX_CROSS_DELAY_MS);
        let samples = (self.sample_rate * self.cross_delay_ms / 1000.0).max(1.0);
        self.delay_l.set_delay(samples);
        self.delay_r.set_delay(samples);
    }

    /// Stereo width in `[0, 2]`.
    pub fn set_width(&mut self, width: f32) {
        self.width = width.clamp(0.0, 2.0);
    }

    /// Invert the R-to-L cross-feed tap's phase.
    pub fn set_phase_invert(&mut self, invert: bool) {
        self.phase_invert = invert;
    }

    /// Bypass the cross-feed taps entirely (width is still applied).
    pub fn set_bypass(&mut self, bypass: bool) {
        self.bypass = bypass;
    }

    /// Update the sample rate and re-derive the cross-delay length.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        let max_samples = (sample_rate * MAX_CROSS_DELAY_MS / 1000.0) as usize + 2;
        self.delay_l = DelayLine::new(max_samples);
        self.delay_r = DelayLine::new(max_samples);
        self.set_cross_delay_ms(self.cross_delay_ms);
    }

    /// Process one stereo input sample, producing the pre-mixed pair fed
    /// into the mono downmix.
    #[inline]
    pub fn process(&mut self, l: f32, r: f32) -> (f32, f32) {
        if self.bypass {
            let mid = (l + r) * 0.5;
            let side = (l - r) * self.width * 0.5;
            return (mid + side, mid - side);
        }

        let d_l = self.delay_l.read();
        let d_r = self.delay_r.read();

        let cl_to_r = d_l * self.amount;
        let mut cr_to_l = d_r * self.amount;
        if self.phase_invert {
            cr_to_l = -cr_to_l;
        }

        let mixed_l = l + cr_to_l;
        let mixed_r = r + cl_to_r;

        let mid = (mixed_l + mixed_r) * 0.5;
        let side = (mixed_l - mixed_r) * self.width * 0.5;

        self.delay_l.write(l);
        self.delay_r.write(r);

        (mid + side, mid - side)
    }

    /// Clear both cross-feed delay lines.
    pub fn clear(&mut self) {
        self.delay_l.clear();
        self.delay_r.clear();
    }
}
