//! Divergence between discretized densities.
//!
//! Both inputs are treated as unnormalized masses over the same grid and
//! scaled to unit mass before comparison, so densities sampled on a grid
//! can be passed in directly. All results are in nats.

use crate::error::{DivergenceError, Result};

/// Default ceiling for the clamped divergence
pub const MAX_DIVERGENCE_ALLOWED: f64 = 1e6;

/// Normalize a distribution to sum to 1.0
///
/// Negative and NaN entries count as zero mass. A vector with no positive
/// mass becomes uniform.
#[inline]
pub fn normalize(dist: &mut [f64]) {
    for x in dist.iter_mut() {
        *x = x.max(0.0);
    }
    let sum: f64 = dist.iter().sum();
    if sum > 0.0 {
        for x in dist.iter_mut() {
            *x /= sum;
        }
    } else if !dist.is_empty() {
        let uniform = 1.0 / dist.len() as f64;
        for x in dist.iter_mut() {
            *x = uniform;
        }
    }
}

fn normalized(dist: &[f64]) -> Vec<f64> {
    let mut out = dist.to_vec();
    normalize(&mut out);
    out
}

/// KL Divergence D_KL(P || Q) = Σ p_i * ln(p_i / q_i)
///
/// - A zero `p_i` contributes nothing, whatever `q_i` is (so 0/0 is 0).
/// - A positive `p_i` over a zero `q_i` makes the result `+∞`.
///
/// Asymmetric: D_KL(P || Q) != D_KL(Q || P) in general.
pub fn kl_divergence(p: &[f64], q: &[f64]) -> Result<f64> {
    if p.len() != q.len() {
        return Err(DivergenceError::DimensionMismatch {
            expected: p.len(),
            got: q.len(),
        });
    }

    let p = normalized(p);
    let q = normalized(q);

    let mut kl = 0.0;
    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi <= 0.0 {
            continue;
        }
        if qi <= 0.0 {
            return Ok(f64::INFINITY);
        }
        kl += pi * (pi / qi).ln();
    }

    Ok(kl)
}

/// [`kl_divergence`] mapped into `[0, max]`.
///
/// Infinite or NaN divergence becomes `max`; rounding below zero becomes 0.
pub fn clamped_kl_divergence(p: &[f64], q: &[f64], max: f64) -> Result<f64> {
    let kl = kl_divergence(p, q)?;
    Ok(clamp_divergence(kl, max))
}

/// Map a raw divergence into `[0, max]`
#[inline]
pub fn clamp_divergence(kl: f64, max: f64) -> f64 {
    if kl.is_nan() {
        max
    } else {
        kl.clamp(0.0, max)
    }
}
