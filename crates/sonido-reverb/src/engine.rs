//! The FDN reverb engine façade.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::time::Instant;

use sonido_core::{SmoothedParam, flush_denormal};

use crate::allpass::AllPassFilter;
use crate::config::{EngineConfig, MAX_PRE_DELAY_S};
use crate::constants::{
    DIFFUSION_PRIMES, EARLY_REFLECTION_PRIMES_48K, diffusion_gain, early_reflection_gain,
    scaled_early_reflection_delay, scaled_line_delay,
};
use crate::cross_feed::{CrossFeedState, MAX_CROSS_DELAY_MS};
use crate::damping::DampingFilter;
use crate::decay;
use crate::delay_line::{DelayLine, MAX_DELAY_SAMPLES};
use crate::error::{EngineError, ProcessError};
use crate::feedback_matrix::FeedbackMatrix;
use crate::parameters::{ParameterSnapshot, Parameters};
use crate::preset::Preset;
use crate::room_size_guard::RoomSizeGuard;
use crate::stereo_spread::StereoSpread;
use crate::tone_filter::ToneFilter;

const EARLY_CAPACITY: usize = 2432;
const DIFFUSION_CAPACITY: usize = 256;

/// One-pole smoothing time for gain-like parameters (cross-feed amount).
const GAIN_SMOOTH_MS: f32 = 50.0;
/// One-pole smoothing time for cutoff/width parameters (stereo width,
/// tone filter cutoffs).
const CUTOFF_SMOOTH_MS: f32 = 100.0;

/// Independent pre-delay + early-reflection + diffusion chain for one input
/// channel: the two stereo channels get their own copy of
/// this state, while the FDN line bank downstream is shared.
#[derive(Debug, Clone)]
struct ChannelChain {
    pre_delay: DelayLine,
    early: Vec<AllPassFilter>,
    diffusion: Vec<AllPassFilter>,
}

impl ChannelChain {
    fn new(sample_rate_hz: f32, room_size: f32, density: f32) -> Self {
        let max_pre_delay_samples = (sample_rate_hz * MAX_PRE_DELAY_S) as usize + 4;
        let early = (0..EARLY_REFLECTION_PRIMES_48K.len())
            .map(|i| {
                AllPassFilter::new(
                    EARLY_CAPACITY,
                    scaled_early_reflection_delay(i, sample_rate_hz, room_size),
                    early_reflection_gain(i),
                )
            })
            .collect();
        let diffusion = (0..DIFFUSION_PRIMES.len())
            .map(|i| {
                AllPassFilter::new(
                    DIFFUSION_CAPACITY,
                    DIFFUSION_PRIMES[i] as f32,
                    diffusion_gain(i, density),
                )
            })
            .collect();
        Self {
            pre_delay: DelayLine::new(max_pre_delay_samples),
            early,
            diffusion,
        }
    }

    fn set_pre_delay(&mut self, pre_delay_s: f32, sample_rate_hz: f32) {
        self.pre_delay.set_delay((pre_delay_s * sample_rate_hz).max(1.0));
    }

    fn retune(&mut self, sample_rate_hz: f32, room_size: f32) {
        for (i, ap) in self.early.iter_mut().enumerate() {
            ap.set_delay(scaled_early_reflection_delay(i, sample_rate_hz, room_size));
        }
    }

    fn set_density(&mut self, density: f32) {
        for (i, ap) in self.diffusion.iter_mut().enumerate() {
            ap.set_gain(diffusion_gain(i, density));
        }
    }

    #[inline]
    fn process(&mut self, x: f32) -> f32 {
        let mut s = self.pre_delay.process(x);
        for ap in &mut self.early {
            s = ap.process(s);
        }
        for ap in &mut self.diffusion {
            s = ap.process(s);
        }
        s
    }

    fn clear(&mut self) {
        self.pre_delay.clear();
        for ap in &mut self.early {
            ap.clear();
        }
        for ap in &mut self.diffusion {
            ap.clear();
        }
    }
}

#[inline]
fn sanitize(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(-1.0, 1.0) }
}

/// Real-time FDN reverb engine. Owns every piece of DSP state; the only
/// shared-across-threads piece is [`Parameters`].
pub struct Engine {
    config: EngineConfig,
    parameters: Arc<Parameters>,
    last_snapshot: ParameterSnapshot,
    room_guard: RoomSizeGuard,

    left: ChannelChain,
    right: ChannelChain,

    lines: Vec<DelayLine>,
    damping: Vec<DampingFilter>,
    matrix: FeedbackMatrix,
    matrix_unscaled: Vec<f32>,

    cross_feed: CrossFeedState,
    stereo_spread: StereoSpread,
    tone_filter: ToneFilter,

    // Per-sample-ramped targets for parameters that would otherwise zipper
    // when written once per block: cross-feed amount, stereo width, and the
    // tone filter's two cutoffs.
    cross_feed_amount_smooth: SmoothedParam,
    stereo_width_smooth: SmoothedParam,
    hi_cut_smooth: SmoothedParam,
    lo_cut_smooth: SmoothedParam,

    delay_out: Vec<f32>,
    mat_out: Vec<f32>,
    damped: Vec<f32>,

    cpu_load: f32,
    #[cfg(feature = "std")]
    last_block_start: Option<Instant>,
}

impl Engine {
    /// Allocate and initialize an engine. Fails only when sample
    /// rate or block size are out of range; `num_lines` is clamped.
    pub fn create(sample_rate_hz: f32, max_block_size: u32, num_lines: u32) -> Result<Self, EngineError> {
        let config = EngineConfig::new(sample_rate_hz, max_block_size, num_lines)?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: EngineConfig) -> Self {
        let n = config.num_delay_lines as usize;
        let sr = config.sample_rate_hz;

        let parameters = Arc::new(Parameters::new());
        let snapshot = parameters.snapshot();

        let lines: Vec<DelayLine> = (0..n)
            .map(|i| {
                let mut line = DelayLine::new(MAX_DELAY_SAMPLES);
                let max_delay = (MAX_DELAY_SAMPLES - 1) as f32;
                line.set_delay(scaled_line_delay(i, sr, snapshot.room_size, max_delay));
                line
            })
            .collect();
        let damping: Vec<DampingFilter> = (0..n)
            .map(|_| {
                let mut d = DampingFilter::new(sr);
                d.set_damping(snapshot.hf_damping, snapshot.lf_damping);
                d
            })
            .collect();

        let matrix = FeedbackMatrix::new(n);
        let matrix_unscaled = matrix.as_slice().to_vec();

        let mut engine = Self {
            config,
            parameters,
            last_snapshot: snapshot,
            room_guard: RoomSizeGuard::new(snapshot.room_size),
            left: ChannelChain::new(sr, snapshot.room_size, snapshot.density),
            right: ChannelChain::new(sr, snapshot.room_size, snapshot.density),
            lines,
            damping,
            matrix,
            matrix_unscaled,
            cross_feed: CrossFeedState::new(sr),
            stereo_spread: StereoSpread::new(),
            tone_filter: ToneFilter::new(sr),
            cross_feed_amount_smooth: SmoothedParam::with_config(
                snapshot.cross_feed_amount,
                sr,
                GAIN_SMOOTH_MS,
            ),
            stereo_width_smooth: SmoothedParam::with_config(snapshot.stereo_spread, sr, CUTOFF_SMOOTH_MS),
            hi_cut_smooth: SmoothedParam::with_config(snapshot.hi_cut_hz, sr, CUTOFF_SMOOTH_MS),
            lo_cut_smooth: SmoothedParam::with_config(snapshot.lo_cut_hz, sr, CUTOFF_SMOOTH_MS),
            delay_out: vec![0.0; n],
            mat_out: vec![0.0; n],
            damped: vec![0.0; n],
            cpu_load: 0.0,
            #[cfg(feature = "std")]
            last_block_start: None,
        };

        engine.left.set_pre_delay(snapshot.pre_delay_s, sr);
        engine.right.set_pre_delay(snapshot.pre_delay_s, sr);
        engine.cross_feed.set_amount(snapshot.cross_feed_amount);
        engine.cross_feed.set_cross_delay_ms(snapshot.cross_delay_ms);
        engine.cross_feed.set_width(snapshot.stereo_width);
        engine.stereo_spread.set_width(snapshot.stereo_spread);
        engine.tone_filter.set_hi_cut_hz(snapshot.hi_cut_hz);
        engine.tone_filter.set_lo_cut_hz(snapshot.lo_cut_hz);
        engine.rescale_matrix(&snapshot);

        engine
    }

    /// An independent handle to this engine's parameter store, for control
    /// threads to call [`Parameters::set`]/[`Parameters::apply_preset`]
    /// without touching the `Engine` itself.
    pub fn parameters(&self) -> Arc<Parameters> {
        Arc::clone(&self.parameters)
    }

    /// Range-clamped, wait-free parameter write.
    pub fn set_parameter(&self, name: &str, value: f32) {
        self.parameters.set(name, value);
    }

    /// Atomic bulk application of a named preset.
    pub fn apply_preset(&self, preset: Preset) {
        self.parameters.apply_preset(preset);
    }

    /// EWMA of `processing_time / block_duration * 100`, updated by
    /// `process_*`. Always `0.0` in a `no_std` build (no timer source).
    pub fn cpu_load(&self) -> f32 {
        self.cpu_load
    }

    /// Current FDN line delay lengths, in samples (introspection only).
    pub fn current_delays(&self) -> Vec<u32> {
        self.lines.iter().map(|l| l.delay_samples() as u32).collect()
    }

    /// Clear all delay/filter/matrix history. Parameters are preserved.
    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
        for line in &mut self.lines {
            line.clear();
        }
        for d in &mut self.damping {
            d.clear();
        }
        self.cross_feed.clear();
        self.tone_filter.clear();
    }

    fn average_line_delay(&self) -> f32 {
        let sum: f32 = self.lines.iter().map(DelayLine::delay_samples).sum();
        sum / self.lines.len() as f32
    }

    fn rescale_matrix(&mut self, snap: &ParameterSnapshot) {
        let avg_delay = self.average_line_delay();
        let gain = decay::final_gain(
            avg_delay,
            self.config.sample_rate_hz,
            snap.decay_time_s,
            snap.room_size,
            snap.hf_damping,
            snap.lf_damping,
        );
        self.matrix.rescale_from(&self.matrix_unscaled, gain);
    }

    /// Room-size flush, coefficient recomputation, and smoother-target
    /// updates performed once at the start of every block.
    fn maybe_reconfigure(&mut self) {
        let snap = self.parameters.snapshot();
        let sr = self.config.sample_rate_hz;

        let flushed = self.room_guard.observe(snap.room_size);
        if flushed {
            self.left.clear();
            self.right.clear();
            for line in &mut self.lines {
                line.clear();
            }
            for d in &mut self.damping {
                d.clear();
            }
            self.cross_feed.clear();
            self.tone_filter.clear();

            let max_delay = (MAX_DELAY_SAMPLES - 1) as f32;
            for (i, line) in self.lines.iter_mut().enumerate() {
                line.set_delay(scaled_line_delay(i, sr, snap.room_size, max_delay));
            }
            self.left.retune(sr, snap.room_size);
            self.right.retune(sr, snap.room_size);
        }

        if flushed || (snap.density - self.last_snapshot.density).abs() > f32::EPSILON {
            self.left.set_density(snap.density);
            self.right.set_density(snap.density);
        }

        if (snap.pre_delay_s - self.last_snapshot.pre_delay_s).abs() > f32::EPSILON {
            self.left.set_pre_delay(snap.pre_delay_s, sr);
            self.right.set_pre_delay(snap.pre_delay_s, sr);
        }

        if flushed
            || snap.hf_damping != self.last_snapshot.hf_damping
            || snap.lf_damping != self.last_snapshot.lf_damping
        {
            for d in &mut self.damping {
                d.set_damping(snap.hf_damping, snap.lf_damping);
            }
        }

        if flushed
            || snap.decay_time_s != self.last_snapshot.decay_time_s
            || snap.room_size != self.last_snapshot.room_size
            || snap.hf_damping != self.last_snapshot.hf_damping
            || snap.lf_damping != self.last_snapshot.lf_damping
        {
            self.rescale_matrix(&snap);
        }

        self.cross_feed.set_cross_delay_ms(snap.cross_delay_ms.min(MAX_CROSS_DELAY_MS));
        self.cross_feed.set_width(snap.stereo_width);

        // cross_feed.amount, stereo_spread.width, and the tone filter cutoffs
        // are ramped per-sample in the process loop rather than snapped here,
        // so a parameter change doesn't zipper. A room-size flush already
        // discards all other state discontinuously, so let these jump too
        // instead of ramping through a reset.
        if flushed {
            self.cross_feed_amount_smooth.set_immediate(snap.cross_feed_amount);
            self.stereo_width_smooth.set_immediate(snap.stereo_spread);
            self.hi_cut_smooth.set_immediate(snap.hi_cut_hz);
            self.lo_cut_smooth.set_immediate(snap.lo_cut_hz);
        } else {
            self.cross_feed_amount_smooth.set_target(snap.cross_feed_amount);
            self.stereo_width_smooth.set_target(snap.stereo_spread);
            self.hi_cut_smooth.set_target(snap.hi_cut_hz);
            self.lo_cut_smooth.set_target(snap.lo_cut_hz);
        }

        self.last_snapshot = snap;
    }

    #[inline]
    fn fdn_tick(&mut self, d: f32) {
        for (out, line) in self.delay_out.iter_mut().zip(self.lines.iter()) {
            *out = line.read();
        }
        self.matrix.multiply(&self.delay_out, &mut self.mat_out);
        for ((line, damp), (mat, damped)) in self
            .lines
            .iter_mut()
            .zip(self.damping.iter_mut())
            .zip(self.mat_out.iter().zip(self.damped.iter_mut()))
        {
            *damped = damp.process(*mat);
            line.write(flush_denormal(d * 0.3 + *damped));
        }
    }

    fn mark_block_start(&mut self) {
        #[cfg(feature = "std")]
        {
            self.last_block_start = Some(Instant::now());
        }
    }

    fn update_cpu_load(&mut self, n: usize) {
        #[cfg(feature = "std")]
        {
            if let Some(start) = self.last_block_start.take() {
                let elapsed_s = start.elapsed().as_secs_f32();
                let block_duration_s = n as f32 / self.config.sample_rate_hz;
                if block_duration_s > 0.0 {
                    let sample = (elapsed_s / block_duration_s) * 100.0;
                    self.cpu_load = self.cpu_load * 0.9 + sample * 0.1;
                }
            }
        }
        #[cfg(not(feature = "std"))]
        {
            let _ = n;
        }
    }

    fn check_block_size(&self, n: usize) -> Result<(), ProcessError> {
        if n > self.config.max_block_size as usize {
            Err(ProcessError::BlockTooLarge {
                requested: n,
                max: self.config.max_block_size as usize,
            })
        } else {
            Ok(())
        }
    }

    /// Process one stereo block. `in_l`/`in_r`/`out_l`/`out_r` must each be
    /// at least `n` samples; `n = 0` is a no-op.
    pub fn process_stereo(
        &mut self,
        in_l: &[f32],
        in_r: &[f32],
        out_l: &mut [f32],
        out_r: &mut [f32],
        n: usize,
    ) -> Result<(), ProcessError> {
        if n == 0 {
            return Ok(());
        }
        self.check_block_size(n)?;
        if in_l.len() < n || in_r.len() < n || out_l.len() < n || out_r.len() < n {
            return Err(ProcessError::BufferMismatch(
                "stereo in/out slices must be at least n samples",
            ));
        }

        self.mark_block_start();
        self.maybe_reconfigure();

        if self.last_snapshot.bypass {
            out_l[..n].fill(0.0);
            out_r[..n].fill(0.0);
            self.update_cpu_load(n);
            return Ok(());
        }

        for i in 0..n {
            let l = sanitize(in_l[i]);
            let r = sanitize(in_r[i]);

            self.cross_feed.set_amount(self.cross_feed_amount_smooth.advance());
            let (cf_l, cf_r) = self.cross_feed.process(l, r);
            let e_l = self.left.process(cf_l);
            let e_r = self.right.process(cf_r);
            let d = 0.5 * (e_l + e_r);

            self.fdn_tick(d);

            let mut w_l = 0.0_f32;
            let mut w_r = 0.0_f32;
            for (j, damped) in self.damped.iter().enumerate() {
                let (left_gain, right_gain) = if j % 2 == 0 { (0.7, 0.3) } else { (0.3, 0.7) };
                w_l += damped * left_gain;
                w_r += damped * right_gain;
            }
            w_l *= 0.3;
            w_r *= 0.3;

            self.stereo_spread.set_width(self.stereo_width_smooth.advance());
            let (w_l, w_r) = self.stereo_spread.process(w_l, w_r);

            self.tone_filter.set_hi_cut_hz(self.hi_cut_smooth.advance());
            self.tone_filter.set_lo_cut_hz(self.lo_cut_smooth.advance());
            let (w_l, w_r) = self.tone_filter.process(w_l, w_r);

            out_l[i] = sanitize(w_l);
            out_r[i] = sanitize(w_r);
        }

        self.update_cpu_load(n);
        Ok(())
    }

    /// Process one mono block through the left-channel pre-delay/early/
    /// diffusion chain, sharing the same FDN line bank as stereo calls.
    pub fn process_mono(&mut self, input: &[f32], output: &mut [f32], n: usize) -> Result<(), ProcessError> {
        if n == 0 {
            return Ok(());
        }
        self.check_block_size(n)?;
        if input.len() < n || output.len() < n {
            return Err(ProcessError::BufferMismatch(
                "mono in/out slices must be at least n samples",
            ));
        }

        self.mark_block_start();
        self.maybe_reconfigure();

        if self.last_snapshot.bypass {
            output[..n].fill(0.0);
            self.update_cpu_load(n);
            return Ok(());
        }

        for i in 0..n {
            let x = sanitize(input[i]);
            let d = self.left.process(x);

            self.fdn_tick(d);

            let mono: f32 = 0.3 * self.damped.iter().sum::<f32>();
            output[i] = sanitize(mono);
        }

        self.update_cpu_load(n);
        Ok(())
    }

    /// Drive a single-sample impulse followed by silence through the mono
    /// path and return `length_samples` of the resulting output, for
    /// offline RT60/IR validation. Does not reset engine state first;
    /// call [`Engine::reset`] beforehand for a clean measurement.
    pub fn generate_impulse_response(&mut self, length_samples: usize) -> Vec<f32> {
        let block = (self.config.max_block_size as usize).max(1);
        let mut out = Vec::with_capacity(length_samples);
        let mut scratch_in = vec![0.0_f32; block];
        let mut scratch_out = vec![0.0_f32; block];

        let mut remaining = length_samples;
        let mut first = true;
        while remaining > 0 {
            let n = remaining.min(block);
            for s in scratch_in[..n].iter_mut() {
                *s = 0.0;
            }
            if first {
                scratch_in[0] = 1.0;
                first = false;
            }
            let _ = self.process_mono(&scratch_in[..n], &mut scratch_out[..n], n);
            out.extend_from_slice(&scratch_out[..n]);
            remaining -= n;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(sr: f32) -> Engine {
        Engine::create(sr, 65536, 8).unwrap()
    }

    #[test]
    fn create_rejects_bad_config() {
        assert!(Engine::create(1000.0, 512, 8).is_err());
    }

    #[test]
    fn silence_in_silence_out_clean_preset() {
        let mut e = engine(48000.0);
        e.apply_preset(Preset::Clean);
        let input = vec![0.0_f32; 4800];
        let mut output = vec![1.0_f32; 4800];
        e.process_mono(&input, &mut output, 4800).unwrap();
        assert!(output.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn clean_preset_is_silent_regardless_of_input() {
        let mut e = engine(48000.0);
        e.apply_preset(Preset::Clean);
        let mut input = vec![0.0_f32; 512];
        input[0] = 1.0;
        let mut output = vec![1.0_f32; 512];
        e.process_mono(&input, &mut output, 512).unwrap();
        assert!(output.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn block_too_large_is_rejected() {
        let mut e = Engine::create(48000.0, 512, 8).unwrap();
        let input = vec![0.0_f32; 4096];
        let mut output = vec![0.0_f32; 4096];
        let err = e.process_mono(&input, &mut output, 4096).unwrap_err();
        assert_eq!(
            err,
            ProcessError::BlockTooLarge {
                requested: 4096,
                max: 512
            }
        );
    }

    #[test]
    fn impulse_produces_nonzero_decaying_tail() {
        let mut e = engine(48000.0);
        e.apply_preset(Preset::Studio);
        let mut input = vec![0.0_f32; 48000];
        input[0] = 1.0;
        let mut output = vec![0.0_f32; 48000];
        e.process_mono(&input, &mut output, 48000).unwrap();

        let early_energy: f32 = output[100..5000].iter().map(|x| x * x).sum();
        let late_energy: f32 = output[40000..48000].iter().map(|x| x * x).sum();
        assert!(early_energy > 0.0);
        assert!(late_energy < early_energy);
        assert!(output.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn width_zero_collapses_stereo_to_mono() {
        let mut e = engine(48000.0);
        e.apply_preset(Preset::Studio);
        e.set_parameter("stereo_spread", 0.0);

        // Width ramps to its target over ~100 ms rather than snapping
        // (zipper-free); let it fully settle before checking convergence.
        let silence = vec![0.0_f32; 24000];
        let mut discard_l = vec![0.0_f32; 24000];
        let mut discard_r = vec![0.0_f32; 24000];
        e.process_stereo(&silence, &silence, &mut discard_l, &mut discard_r, 24000)
            .unwrap();

        let mut input_l = vec![0.0_f32; 2048];
        let mut input_r = vec![0.0_f32; 2048];
        input_l[0] = 1.0;
        input_r[0] = 0.6;
        let mut out_l = vec![0.0_f32; 2048];
        let mut out_r = vec![0.0_f32; 2048];
        e.process_stereo(&input_l, &input_r, &mut out_l, &mut out_r, 2048)
            .unwrap();

        for i in 100..2048 {
            assert!((out_l[i] - out_r[i]).abs() < 1e-5, "i={}", i);
        }
    }

    #[test]
    fn hi_cut_change_ramps_instead_of_snapping() {
        let mut e = engine(48000.0);
        e.apply_preset(Preset::Studio);
        e.set_parameter("hi_cut_hz", 1000.0);

        // Right after the parameter change, the smoother has only advanced
        // a few samples toward the new target, so it must still be much
        // closer to the old (near 20000 Hz default) cutoff than the new one.
        let input = vec![0.0_f32; 8];
        let mut out_l = vec![0.0_f32; 8];
        let mut out_r = vec![0.0_f32; 8];
        e.process_stereo(&input, &input, &mut out_l, &mut out_r, 8).unwrap();
        assert!((e.hi_cut_smooth.get() - 1000.0).abs() > 1000.0);

        // After several time constants it converges to the target.
        let silence = vec![0.0_f32; 24000];
        let mut discard_l = vec![0.0_f32; 24000];
        let mut discard_r = vec![0.0_f32; 24000];
        e.process_stereo(&silence, &silence, &mut discard_l, &mut discard_r, 24000)
            .unwrap();
        assert!((e.hi_cut_smooth.get() - 1000.0).abs() < 10.0);
    }

    #[test]
    fn room_size_jump_flushes_tail() {
        let mut e = engine(48000.0);
        e.apply_preset(Preset::Studio);

        let mut input = vec![0.0_f32; 24000];
        input[0] = 1.0;
        let mut output = vec![0.0_f32; 24000];
        e.process_mono(&input, &mut output, 24000).unwrap();
        let pre_change_rms: f32 =
            (output[20000..24000].iter().map(|x| x * x).sum::<f32>() / 4000.0).sqrt();

        e.set_parameter("room_size", 0.9);
        let silence = vec![0.0_f32; 512];
        let mut after = vec![1.0_f32; 512];
        e.process_mono(&silence, &mut after, 512).unwrap();
        let after_rms: f32 = (after.iter().map(|x| x * x).sum::<f32>() / 512.0).sqrt();

        assert!(after_rms <= pre_change_rms.max(1e-9) * 0.1 + 1e-9);
    }

    #[test]
    fn reset_clears_tail_without_touching_parameters() {
        let mut e = engine(48000.0);
        e.apply_preset(Preset::Cathedral);
        let mut input = vec![0.0_f32; 2048];
        input[0] = 1.0;
        let mut output = vec![0.0_f32; 2048];
        e.process_mono(&input, &mut output, 2048).unwrap();

        e.reset();

        let silence = vec![0.0_f32; 256];
        let mut after_reset = vec![1.0_f32; 256];
        e.process_mono(&silence, &mut after_reset, 256).unwrap();
        assert!(after_reset.iter().all(|&x| x == 0.0));
        assert_eq!(e.last_snapshot.preset, Preset::Cathedral);
    }

    #[test]
    fn current_delays_has_one_entry_per_line() {
        let e = Engine::create(48000.0, 512, 6).unwrap();
        assert_eq!(e.current_delays().len(), 6);
    }
}
