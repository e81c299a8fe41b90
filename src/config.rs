//! Engine configuration.

use crate::divergence::MAX_DIVERGENCE_ALLOWED;
use crate::error::{DivergenceError, Result};
use crate::kde::BandwidthRule;
use serde::{Deserialize, Serialize};

/// Numeric policy for a [`DivergenceEngine`](crate::engine::DivergenceEngine).
///
/// Passed by value into the engine, so differently configured engines can
/// run side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ceiling applied to the divergence score
    pub max_divergence: f64,

    /// Kernel bandwidth selection for both density estimates
    pub bandwidth: BandwidthRule,

    /// Return the grid and both density curves with each comparison
    pub keep_curves: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_divergence: MAX_DIVERGENCE_ALLOWED,
            bandwidth: BandwidthRule::default(),
            keep_curves: true,
        }
    }
}

impl EngineConfig {
    pub fn with_max_divergence(mut self, max_divergence: f64) -> Self {
        self.max_divergence = max_divergence;
        self
    }

    pub fn with_bandwidth(mut self, bandwidth: BandwidthRule) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    pub fn with_curves(mut self, keep_curves: bool) -> Self {
        self.keep_curves = keep_curves;
        self
    }

    /// Reject settings the engine cannot honour
    pub fn validate(&self) -> Result<()> {
        if !(self.max_divergence.is_finite() && self.max_divergence > 0.0) {
            return Err(DivergenceError::ConfigError(format!(
                "max_divergence must be finite and positive, got {}",
                self.max_divergence
            )));
        }
        self.bandwidth
            .validate()
            .map_err(|e| DivergenceError::ConfigError(e.to_string()))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DivergenceError::SerializationError(e.to_string()))
    }

    /// Deserialize from JSON and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DivergenceError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
