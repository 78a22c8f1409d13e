//! Schröeder all-pass filter with a runtime-settable delay length.
//!
//! `sonido_core::AllpassFilter` fixes its delay at construction, which suits
//! a static effect chain but not a reverb whose early-reflection and
//! diffusion delays are re-derived whenever room size changes. This type
//! carries the same two-phase `DelayLine` plus the extra `last_output`
//! feedback term the Schröeder form needs, over a pre-allocated buffer that
//! can be retargeted without reallocating it.

use sonido_core::flush_denormal;

use crate::delay_line::DelayLine;

/// All-pass filter: `y = -g*x + d_old + g*last_output`, `write(x + g*y)`.
#[derive(Debug, Clone)]
pub struct AllPassFilter {
    delay: DelayLine,
    gain: f32,
    last_output: f32,
}

impl AllPassFilter {
    /// Allocate with `max_delay_samples` capacity and set the initial delay
    /// to `delay_samples` (clamped to the capacity).
    pub fn new(max_delay_samples: usize, delay_samples: f32, gain: f32) -> Self {
        let mut delay = DelayLine::new(max_delay_samples);
        delay.set_delay(delay_samples);
        Self {
            delay,
            gain: gain.clamp(-0.99, 0.99),
            last_output: 0.0,
        }
    }

    /// Retarget the delay length (e.g. after a room-size change).
    pub fn set_delay(&mut self, delay_samples: f32) {
        self.delay.set_delay(delay_samples);
    }

    /// Set the all-pass gain, clamped to `(-1, 1)`.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain.clamp(-0.99, 0.99);
    }

    /// Process one sample through the filter.
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        let d_old = self.delay.read();
        let y = -self.gain * x + d_old + self.gain * self.last_output;
        let feedback = x + self.gain * y;
        self.delay.write(flush_denormal(feedback));
        self.last_output = y;
        y
    }

    /// Clear delay-line and feedback state.
    pub fn clear(&mut self) {
        self.delay.clear();
        self.last_output = 0.0;
    }
}
