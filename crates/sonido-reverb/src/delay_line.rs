//! Fixed-capacity fractional delay line used by the FDN core and pre-delay.
//!
//! Thin wrapper over [`sonido_core::InterpolatedDelay`] that tracks its own
//! delay length and exposes the two-phase `read`/`write` pair the FDN sample
//! loop needs, plus a combined `process` for single-phase callers
//! (pre-delay, cross-feed taps).

use sonido_core::InterpolatedDelay;

/// Largest delay line size this engine will allocate, in samples. Must
/// comfortably exceed `96000 Hz * MAX_PRE_DELAY_S`, the worst-case pre-delay
/// buffer requested at the top of the supported sample-rate range.
pub const MAX_DELAY_SAMPLES: usize = 32768;

/// Circular buffer with linear interpolation and a settable delay length.
#[derive(Debug, Clone)]
pub struct DelayLine {
    inner: InterpolatedDelay,
    delay_samples: f32,
}

impl DelayLine {
    /// Allocate a delay line with the given capacity (clamped to
    /// `[2, MAX_DELAY_SAMPLES]`) and an initial delay length equal to the
    /// capacity minus one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(2, MAX_DELAY_SAMPLES);
        let inner = InterpolatedDelay::new(capacity);
        let delay_samples = (capacity - 1) as f32;
        Self {
            inner,
            delay_samples,
        }
    }

    /// Set the delay length in samples, clamped to `[1, capacity-1]`.
    #[inline]
    pub fn set_delay(&mut self, d: f32) {
        let max = (self.inner.capacity() - 1) as f32;
        self.delay_samples = d.clamp(1.0, max);
    }

    /// Current configured delay length in samples.
    #[inline]
    pub fn delay_samples(&self) -> f32 {
        self.delay_samples
    }

    /// Read the delayed sample without writing.
    #[inline]
    pub fn read(&self) -> f32 {
        self.inner.read(self.delay_samples)
    }

    /// Write a sample and advance the write position.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.inner.write(sample);
    }

    /// Combined read-then-write at the configured delay length.
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.read();
        self.write(x);
        y
    }

    /// Clear all state (buffer zeroed, write position reset).
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Maximum delay this line can hold.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_before_write_is_zero() {
        let line = DelayLine::new(16);
        assert_eq!(line.read(), 0.0);
    }

    #[test]
    fn process_round_trips_after_delay() {
        let mut line = DelayLine::new(8);
        line.set_delay(4.0);
        let mut last = 0.0;
        for i in 1..=4 {
            last = line.process(i as f32);
        }
        assert_eq!(last, 0.0);
        let out = line.process(0.0);
        assert_eq!(out, 1.0);
    }

    #[test]
    fn capacity_is_clamped() {
        let line = DelayLine::new(1);
        assert_eq!(line.capacity(), 2);
        let huge = DelayLine::new(1_000_000);
        assert_eq!(huge.capacity(), MAX_DELAY_SAMPLES);
    }

    #[test]
    fn clear_resets_state() {
        let mut line = DelayLine::new(8);
        line.set_delay(2.0);
        line.process(1.0);
        line.process(1.0);
        line.clear();
        assert_eq!(line.process(0.0), 0.0);
    }
}
