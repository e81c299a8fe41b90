//! Shared evaluation grid for two sample sets.

use crate::sample::SampleSet;
use serde::{Deserialize, Serialize};

/// Evenly spaced points on `[lower, upper]`, both endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationGrid {
    points: Vec<f64>,
}

impl EvaluationGrid {
    /// `n` evenly spaced points from `lower` to `upper`.
    ///
    /// `n == 0` gives an empty grid, `n == 1` gives `[lower]`. Both
    /// endpoints are pinned so rounding never moves them. Points are
    /// interpolated rather than stepped, so finite bounds give finite points
    /// even when `upper - lower` overflows.
    pub fn linspace(lower: f64, upper: f64, n: usize) -> Self {
        let points = match n {
            0 => Vec::new(),
            1 => vec![lower],
            _ => {
                let last = (n - 1) as f64;
                let mut points: Vec<f64> = (0..n)
                    .map(|i| {
                        let t = i as f64 / last;
                        lower * (1.0 - t) + upper * t
                    })
                    .collect();
                points[0] = lower;
                points[n - 1] = upper;
                points
            }
        };
        Self { points }
    }

    /// Grid covering the joint support of both sets with
    /// `max(|p|, |q|)` points.
    ///
    /// Returns `None` if either set is empty.
    pub fn spanning(p: &SampleSet, q: &SampleSet) -> Option<Self> {
        let lower = p.min()?.min(q.min()?);
        let upper = p.max()?.max(q.max()?);
        Some(Self::linspace(lower, upper, p.len().max(q.len())))
    }

    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn lower(&self) -> Option<f64> {
        self.points.first().copied()
    }

    pub fn upper(&self) -> Option<f64> {
        self.points.last().copied()
    }

    /// Spacing between neighbours (0 for fewer than two points)
    pub fn step(&self) -> f64 {
        match (self.points.first(), self.points.get(1)) {
            (Some(a), Some(b)) => b - a,
            _ => 0.0,
        }
    }
}
