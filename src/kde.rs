//! Gaussian kernel density estimation.
//!
//! A density is estimated by centering one Gaussian kernel on every
//! observation and averaging:
//!
//! ```text
//! f(x) = (1 / (n·h)) Σ K((x - xᵢ) / h),   K(u) = exp(-u²/2) / √(2π)
//! ```
//!
//! The bandwidth `h` is chosen by a rule of thumb from the sample size and
//! the unbiased sample standard deviation, or supplied directly.

use crate::error::{DivergenceError, Result};
use crate::sample::SampleSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 1 / √(2π)
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Bandwidth used when the sample set is too degenerate for a rule of thumb
/// (fewer than two distinct values, zero spread).
pub const MIN_BANDWIDTH: f64 = 1e-3;

/// How the kernel bandwidth is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandwidthRule {
    /// Scott's rule: h = σ · n^(-1/5)
    #[default]
    Scott,
    /// Silverman's rule: h = σ · (3n/4)^(-1/5)
    Silverman,
    /// Caller-supplied bandwidth
    Fixed(f64),
}

impl BandwidthRule {
    /// Check that a fixed bandwidth is usable
    pub fn validate(&self) -> Result<()> {
        match *self {
            BandwidthRule::Fixed(h) if !(h.is_finite() && h > 0.0) => {
                Err(DivergenceError::InvalidBandwidth(h))
            }
            _ => Ok(()),
        }
    }

    /// Bandwidth for a non-empty sample set.
    ///
    /// Rule-of-thumb bandwidths fall back to [`MIN_BANDWIDTH`] whenever the
    /// set has fewer than two distinct values or the result is not a finite
    /// positive number.
    pub fn select(&self, samples: &SampleSet) -> Result<f64> {
        let factor = match *self {
            BandwidthRule::Fixed(h) => {
                self.validate()?;
                return Ok(h);
            }
            BandwidthRule::Scott => scott_factor(samples.len()),
            BandwidthRule::Silverman => silverman_factor(samples.len()),
        };

        let h = samples
            .std_dev()
            .filter(|_| samples.distinct_count() >= 2)
            .map(|sigma| sigma * factor)
            .filter(|h| h.is_finite() && *h > 0.0);

        match h {
            Some(h) => Ok(h),
            None => {
                warn!(
                    n = samples.len(),
                    fallback = MIN_BANDWIDTH,
                    "degenerate sample set, using minimum bandwidth"
                );
                Ok(MIN_BANDWIDTH)
            }
        }
    }
}

fn scott_factor(n: usize) -> f64 {
    (n as f64).powf(-0.2)
}

fn silverman_factor(n: usize) -> f64 {
    (n as f64 * 0.75).powf(-0.2)
}

/// A fitted one-dimensional Gaussian KDE.
///
/// Deserialization goes through the same checks as fitting: samples must be
/// non-empty and finite, bandwidth finite and positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "KdeParts")]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

#[derive(Deserialize)]
struct KdeParts {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl TryFrom<KdeParts> for GaussianKde {
    type Error = DivergenceError;

    fn try_from(parts: KdeParts) -> Result<Self> {
        let samples = SampleSet::new(parts.samples, "kde")?;
        Self::fit(&samples, BandwidthRule::Fixed(parts.bandwidth))
    }
}

impl GaussianKde {
    /// Fit a KDE to a non-empty sample set.
    pub fn fit(samples: &SampleSet, rule: BandwidthRule) -> Result<Self> {
        if samples.is_empty() {
            return Err(DivergenceError::EmptySampleSet);
        }

        let bandwidth = rule.select(samples)?;
        debug!(n = samples.len(), bandwidth, ?rule, "fitted gaussian kde");

        Ok(Self {
            samples: samples.as_slice().to_vec(),
            bandwidth,
        })
    }

    /// Kernel bandwidth (standard deviation of each kernel)
    #[inline]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Number of observations the estimate was built from
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    /// Density at a single point
    pub fn pdf(&self, x: f64) -> f64 {
        let inv_h = 1.0 / self.bandwidth;
        let sum: f64 = self
            .samples
            .iter()
            .map(|&xi| {
                let z = (x - xi) * inv_h;
                (-0.5 * z * z).exp()
            })
            .sum();

        sum * INV_SQRT_2PI * inv_h / self.samples.len() as f64
    }

    /// Density at every point, in order.
    pub fn evaluate(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|&x| self.pdf(x)).collect()
    }
}
