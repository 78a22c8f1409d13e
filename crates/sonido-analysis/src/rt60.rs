//! RT60 estimation from a captured impulse response.
//!
//! A 512-sample RMS envelope locates the IR's peak and its −20 dB/−60 dB
//! crossings; RT60 is read directly off the −60 dB crossing when the decay
//! reaches it within the window, otherwise extrapolated from −20 dB.

const WINDOW: usize = 512;
const DB_20: f32 = -20.0;
const DB_60: f32 = -60.0;

/// RMS envelope of `ir` using non-overlapping `WINDOW`-sample blocks. Each
/// output sample covers `WINDOW` input samples; `envelope[i]` corresponds to
/// input time `i * WINDOW` samples.
pub fn rms_envelope(ir: &[f32]) -> Vec<f32> {
    if ir.is_empty() {
        return Vec::new();
    }
    ir.chunks(WINDOW)
        .map(|chunk| (chunk.iter().map(|x| x * x).sum::<f32>() / chunk.len() as f32).sqrt())
        .collect()
}

fn to_db(value: f32, reference: f32) -> f32 {
    if reference <= 0.0 || value <= 0.0 {
        f32::NEG_INFINITY
    } else {
        20.0 * (value / reference).log10()
    }
}

/// First envelope index at or below `threshold_db` relative to `peak`,
/// searching from `start` onward.
fn first_crossing(envelope: &[f32], peak: f32, threshold_db: f32, start: usize) -> Option<usize> {
    envelope[start..]
        .iter()
        .position(|&v| to_db(v, peak) <= threshold_db)
        .map(|i| i + start)
}

/// Measure RT60 (seconds) from an impulse response captured at
/// `sample_rate_hz`. Returns `None` for an IR with no detectable energy.
///
/// Computes a 512-sample RMS envelope, finds its peak, then locates the
/// −20 dB and −60 dB crossing points relative to that peak. When the decay
/// actually reaches −60 dB within the capture, RT60 is `t_-60dB - t_peak`;
/// otherwise it is extrapolated as `3 * (t_-20dB - t_peak)`.
pub fn measure_rt60(ir: &[f32], sample_rate_hz: f32) -> Option<f32> {
    let envelope = rms_envelope(ir);
    if envelope.is_empty() {
        return None;
    }

    let (peak_idx, &peak) = envelope
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())?;
    if peak <= 0.0 {
        return None;
    }

    let samples_per_block = WINDOW as f32;
    let block_seconds = samples_per_block / sample_rate_hz;

    let crossing_60 = first_crossing(&envelope, peak, DB_60, peak_idx);
    if let Some(idx60) = crossing_60 {
        return Some((idx60 - peak_idx) as f32 * block_seconds);
    }

    let crossing_20 = first_crossing(&envelope, peak, DB_20, peak_idx)?;
    Some(3.0 * (crossing_20 - peak_idx) as f32 * block_seconds)
}
