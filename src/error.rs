//! Error types for the divergence engine.

use thiserror::Error;

/// Main error type for density comparison operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DivergenceError {
    /// A sample set holds a NaN or infinite value
    #[error("Malformed input: sample set {set} has non-finite value {value} at index {index}")]
    MalformedInput {
        set: &'static str,
        index: usize,
        value: f64,
    },

    /// A density estimate was requested for zero observations
    #[error("Cannot fit a density estimate to an empty sample set")]
    EmptySampleSet,

    /// Discretized densities have different lengths
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Kernel bandwidth is not finite and positive
    #[error("Invalid bandwidth: {0}")]
    InvalidBandwidth(f64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for divergence operations.
pub type Result<T> = std::result::Result<T, DivergenceError>;

impl DivergenceError {
    /// Check if this is a recoverable error
    ///
    /// Recoverable errors come from policy (bandwidth, config) and go away
    /// with different settings; the rest need different data.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DivergenceError::InvalidBandwidth(_) | DivergenceError::ConfigError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_message() {
        let err = DivergenceError::MalformedInput {
            set: "q",
            index: 3,
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("sample set q"));
        assert!(msg.contains("index 3"));
    }

    #[test]
    fn test_recoverable() {
        assert!(DivergenceError::InvalidBandwidth(0.0).is_recoverable());
        assert!(DivergenceError::ConfigError("bad".into()).is_recoverable());
        assert!(!DivergenceError::EmptySampleSet.is_recoverable());
        assert!(!DivergenceError::MalformedInput {
            set: "p",
            index: 0,
            value: f64::INFINITY
        }
        .is_recoverable());
    }
}
