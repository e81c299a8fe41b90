//! Divergence Engine - compares two sample sets.
//!
//! Pipeline per comparison:
//!
//! ```text
//! p, q ──► GaussianKde(p), GaussianKde(q)
//!      ──► grid = linspace(min(p ∪ q), max(p ∪ q), max(|p|, |q|))
//!      ──► P_grid, Q_grid
//!      ──► min(max_divergence, D_KL(P_grid || Q_grid))
//! p, q ──► KS statistic on the raw samples
//! ```
//!
//! The engine only returns data. Rendering the grid and curves is up to the
//! caller.

use crate::config::EngineConfig;
use crate::divergence::{clamp_divergence, clamped_kl_divergence, kl_divergence};
use crate::error::{DivergenceError, Result};
use crate::grid::EvaluationGrid;
use crate::kde::GaussianKde;
use crate::ks::ks_statistic;
use crate::sample::SampleSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Grid and discretized densities behind a comparison, for plotting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurves {
    pub grid: EvaluationGrid,
    pub p_density: Vec<f64>,
    pub q_density: Vec<f64>,
    pub p_bandwidth: f64,
    pub q_bandwidth: f64,
}

/// Result of comparing two sample sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// D_KL(P || Q) on the shared grid, in `[0, max_divergence]`
    pub divergence: f64,

    /// Two-sample KS statistic, in `[0, 1]`
    pub ks_statistic: f64,

    /// Present unless an input was empty or curves were disabled
    pub curves: Option<DensityCurves>,
}

impl Comparison {
    /// Result for an empty input
    pub fn empty() -> Self {
        Self {
            divergence: 0.0,
            ks_statistic: 0.0,
            curves: None,
        }
    }

    /// Whether the divergence hit the ceiling it was clamped to
    pub fn is_saturated(&self, max_divergence: f64) -> bool {
        self.divergence >= max_divergence
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DivergenceError::SerializationError(e.to_string()))
    }
}

/// Compares pairs of sample sets under a fixed [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct DivergenceEngine {
    config: EngineConfig,
}

impl DivergenceEngine {
    /// Create an engine, validating the configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare raw sample slices.
    ///
    /// Non-finite values fail with [`DivergenceError::MalformedInput`]
    /// before anything else; an empty side yields [`Comparison::empty`].
    pub fn compare(&self, p: &[f64], q: &[f64]) -> Result<Comparison> {
        let p = SampleSet::from_slice(p, "p")?;
        let q = SampleSet::from_slice(q, "q")?;
        self.compare_sets(&p, &q)
    }

    /// Compare two validated sample sets
    pub fn compare_sets(&self, p: &SampleSet, q: &SampleSet) -> Result<Comparison> {
        let grid = match EvaluationGrid::spanning(p, q) {
            Some(grid) => grid,
            None => {
                debug!(n_p = p.len(), n_q = q.len(), "empty sample set, zero divergence");
                return Ok(Comparison::empty());
            }
        };

        let kde_p = GaussianKde::fit(p, self.config.bandwidth)?;
        let kde_q = GaussianKde::fit(q, self.config.bandwidth)?;

        debug!(
            n_points = grid.len(),
            lower = ?grid.lower(),
            upper = ?grid.upper(),
            "built evaluation grid"
        );

        let p_density = kde_p.evaluate(grid.points());
        let q_density = kde_q.evaluate(grid.points());

        let raw = kl_divergence(&p_density, &q_density)?;
        let divergence = clamp_divergence(raw, self.config.max_divergence);
        if raw.is_nan() || raw > self.config.max_divergence {
            warn!(
                raw,
                max = self.config.max_divergence,
                "divergence clamped to ceiling"
            );
        }

        let ks = ks_statistic(p.as_slice(), q.as_slice());

        let curves = self.config.keep_curves.then(|| DensityCurves {
            grid,
            p_density,
            q_density,
            p_bandwidth: kde_p.bandwidth(),
            q_bandwidth: kde_q.bandwidth(),
        });

        Ok(Comparison {
            divergence,
            ks_statistic: ks,
            curves,
        })
    }

    /// Compare many pairs independently, results in input order.
    ///
    /// Runs on the rayon pool with the `parallel` feature.
    pub fn compare_batch(&self, pairs: &[(Vec<f64>, Vec<f64>)]) -> Vec<Result<Comparison>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(p, q)| self.compare(p, q))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            pairs.iter().map(|(p, q)| self.compare(p, q)).collect()
        }
    }

    /// Clamped divergence of two already-discretized densities
    pub fn divergence_of(&self, p_density: &[f64], q_density: &[f64]) -> Result<f64> {
        clamped_kl_divergence(p_density, q_density, self.config.max_divergence)
    }
}

/// Compare with the default configuration.
///
/// Returns `(divergence, ks_statistic)`.
pub fn compare(p: &[f64], q: &[f64]) -> Result<(f64, f64)> {
    let result = DivergenceEngine::default().compare(p, q)?;
    Ok((result.divergence, result.ks_statistic))
}
