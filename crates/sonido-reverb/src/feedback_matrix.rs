//! Orthogonal Householder feedback matrix.
//!
//! `H = I - 2*v*v^T` for a unit vector `v` is its own inverse and orthogonal
//! by construction, which is what lets the FDN redistribute energy across
//! lines without amplifying or losing it before the decay gain is applied.

use libm::{cosf, logf, sinf, sqrtf};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Fixed seed for the Householder vector draw: every `FeedbackMatrix` of a
/// given size is bit-identical across runs.
pub const SEED: u64 = 42;

/// Dense N×N orthogonal matrix, scaled by the decay-calibrated gain.
#[derive(Debug, Clone)]
pub struct FeedbackMatrix {
    h: Vec<f32>,
    n: usize,
}

impl FeedbackMatrix {
    /// Generate a fresh unscaled Householder matrix for `n` lines.
    pub fn new(n: usize) -> Self {
        let v = unit_normal_vector(n);
        let mut h = vec![0.0_f32; n * n];
        for i in 0..n {
            for j in 0..n {
                let delta = if i == j { 1.0 } else { 0.0 };
                h[i * n + j] = delta - 2.0 * v[i] * v[j];
            }
        }
        debug_assert!(
            orthogonality_error(&h, n) <= 1e-4,
            "Householder matrix failed orthogonality check"
        );
        Self { h, n }
    }

    /// Number of delay lines this matrix couples.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Multiply every element by `gain` in place (applies the decay
    /// calibration's `final_gain`).
    pub fn scale(&mut self, gain: f32) {
        for v in &mut self.h {
            *v *= gain;
        }
    }

    /// Raw row-major matrix data, for snapshotting the unscaled matrix once
    /// at construction time.
    pub fn as_slice(&self) -> &[f32] {
        &self.h
    }

    /// Overwrite this matrix's data as `unscaled[k] * gain`, without
    /// reallocating — used every time the decay calibration's `final_gain`
    /// changes, so the live matrix can be rescaled from the original
    /// orthogonal matrix rather than compounding repeated `scale()` calls.
    pub fn rescale_from(&mut self, unscaled: &[f32], gain: f32) {
        debug_assert_eq!(unscaled.len(), self.h.len());
        for (dst, src) in self.h.iter_mut().zip(unscaled.iter()) {
            *dst = src * gain;
        }
    }

    /// `out[i] = sum_j H[i][j] * d[j]`.
    #[inline]
    pub fn multiply(&self, d: &[f32], out: &mut [f32]) {
        debug_assert_eq!(d.len(), self.n);
        debug_assert_eq!(out.len(), self.n);
        for i in 0..self.n {
            let row = &self.h[i * self.n..(i + 1) * self.n];
            let mut acc = 0.0_f32;
            for (h_ij, d_j) in row.iter().zip(d.iter()) {
                acc += h_ij * d_j;
            }
            out[i] = acc;
        }
    }

    /// `max_ij |(H*H^T - I)_ij|` of the matrix as currently stored (i.e.
    /// after scaling, so this only equals the orthogonality bound pre-scale).
    pub fn orthogonality_error(&self) -> f32 {
        orthogonality_error(&self.h, self.n)
    }
}

fn unit_normal_vector(n: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut v = vec![0.0_f32; n];
    let mut i = 0;
    while i < n {
        // Box-Muller transform from two independent uniforms in (0, 1].
        let u1: f32 = (1.0 - rng.random::<f32>()).max(f32::EPSILON);
        let u2: f32 = rng.random::<f32>();
        let radius = sqrtf(-2.0 * logf(u1));
        let theta = core::f32::consts::TAU * u2;
        v[i] = radius * cosf(theta);
        i += 1;
        if i < n {
            v[i] = radius * sinf(theta);
            i += 1;
        }
    }
    let norm = sqrtf(v.iter().map(|x| x * x).sum::<f32>());
    let norm = if norm > 0.0 { norm } else { 1.0 };
    for x in &mut v {
        *x /= norm;
    }
    v
}

fn orthogonality_error(h: &[f32], n: usize) -> f32 {
    let mut max_err = 0.0_f32;
    for i in 0..n {
        for j in 0..n {
            let mut acc = 0.0_f32;
            for k in 0..n {
                acc += h[i * n + k] * h[j * n + k];
            }
            let expected = if i == j { 1.0 } else { 0.0 };
            max_err = max_err.max((acc - expected).abs());
        }
    }
    max_err
}
