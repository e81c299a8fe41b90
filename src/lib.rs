//! # KDE Divergence
//!
//! Quantifies how different two one-dimensional sample sets are.
//!
//! ## Method
//!
//! Each sample set is smoothed into a Gaussian kernel density estimate.
//! Both densities are sampled on one evenly spaced grid covering the joint
//! support, and the discrete Kullback-Leibler divergence between the two
//! curves is reported, clamped to a configurable ceiling:
//!
//! ```text
//! D(P || Q) = min(MAX, Σ pᵢ · ln(pᵢ / qᵢ))
//! ```
//!
//! Alongside it, the two-sample Kolmogorov-Smirnov statistic is computed
//! straight from the raw samples as a cross-check that does not depend on
//! the density estimates.
//!
//! ## Features
//!
//! - `parallel`: Batch comparisons on a rayon thread pool
//!
//! ## Example
//!
//! ```rust
//! use kde_divergence::{DivergenceEngine, EngineConfig};
//!
//! let engine = DivergenceEngine::new(EngineConfig::default()).unwrap();
//!
//! let p = vec![-1.2, -0.4, 0.1, 0.3, 0.9, 1.4];
//! let q = vec![0.8, 1.5, 1.9, 2.2, 2.6, 3.1];
//!
//! let result = engine.compare(&p, &q).unwrap();
//! println!("KL = {:.4}, KS = {:.4}", result.divergence, result.ks_statistic);
//!
//! assert!(result.divergence >= 0.0);
//! assert!((0.0..=1.0).contains(&result.ks_statistic));
//! ```

pub mod config;
pub mod divergence;
pub mod engine;
pub mod error;
pub mod grid;
pub mod kde;
pub mod ks;
pub mod sample;

// Re-exports
pub use config::*;
pub use divergence::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use kde::*;
pub use ks::*;
pub use sample::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() {
        let engine = DivergenceEngine::default();

        let p = vec![0.0, 0.5, 1.0, 1.5, 2.0];
        let q = vec![1.0, 1.5, 2.0, 2.5, 3.0, 3.5];

        let result = engine.compare(&p, &q).unwrap();

        assert!(result.divergence > 0.0);
        assert!(result.divergence <= MAX_DIVERGENCE_ALLOWED);
        assert!(result.ks_statistic > 0.0 && result.ks_statistic <= 1.0);

        let curves = result.curves.unwrap();
        assert_eq!(curves.grid.len(), 6);
        assert_eq!(curves.grid.lower(), Some(0.0));
        assert_eq!(curves.grid.upper(), Some(3.5));
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
