//! Validated one-dimensional sample sets.

use crate::error::{DivergenceError, Result};
use serde::{Deserialize, Serialize};

/// An ordered, finite sequence of real-valued observations.
///
/// Every value is checked to be finite on construction, so downstream
/// code never sees NaN or infinity. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SampleSet {
    values: Vec<f64>,
}

impl SampleSet {
    /// Validate and wrap a vector of observations.
    ///
    /// `label` names the set in the error ("p", "q", ...).
    pub fn new(values: Vec<f64>, label: &'static str) -> Result<Self> {
        validate_finite(&values, label)?;
        Ok(Self { values })
    }

    /// Validate a borrowed slice, copying it.
    pub fn from_slice(values: &[f64], label: &'static str) -> Result<Self> {
        validate_finite(values, label)?;
        Ok(Self {
            values: values.to_vec(),
        })
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest observation, `None` when empty
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest observation, `None` when empty
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Arithmetic mean, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    /// Unbiased sample variance (n - 1 denominator).
    ///
    /// `None` with fewer than two observations.
    pub fn variance(&self) -> Option<f64> {
        let n = self.values.len();
        if n < 2 {
            return None;
        }
        let mean = self.mean()?;
        let ss: f64 = self.values.iter().map(|&x| (x - mean) * (x - mean)).sum();
        Some(ss / (n - 1) as f64)
    }

    /// Unbiased sample standard deviation
    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Ascending copy of the observations
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Number of distinct values
    pub fn distinct_count(&self) -> usize {
        let sorted = self.sorted();
        if sorted.is_empty() {
            return 0;
        }
        1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

impl TryFrom<Vec<f64>> for SampleSet {
    type Error = DivergenceError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values, "input")
    }
}

impl From<SampleSet> for Vec<f64> {
    fn from(set: SampleSet) -> Self {
        set.values
    }
}

impl AsRef<[f64]> for SampleSet {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Fail on the first NaN or infinite value.
pub fn validate_finite(values: &[f64], label: &'static str) -> Result<()> {
    match values.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(DivergenceError::MalformedInput {
            set: label,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite() {
        let err = SampleSet::new(vec![1.0, f64::NAN, 2.0], "p").unwrap_err();
        assert!(matches!(
            err,
            DivergenceError::MalformedInput {
                set: "p",
                index: 1,
                ..
            }
        ));

        let err = SampleSet::from_slice(&[0.0, 1.0, f64::NEG_INFINITY], "q").unwrap_err();
        assert!(matches!(
            err,
            DivergenceError::MalformedInput { index: 2, .. }
        ));
    }

    #[test]
    fn test_summary_statistics() {
        let set = SampleSet::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], "p").unwrap();
        assert_eq!(set.len(), 8);
        assert_eq!(set.min(), Some(2.0));
        assert_eq!(set.max(), Some(9.0));
        assert!((set.mean().unwrap() - 5.0).abs() < 1e-12);
        // Sum of squares 32 over n - 1 = 7
        assert!((set.variance().unwrap() - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(set.distinct_count(), 5);
    }

    #[test]
    fn test_empty_and_single() {
        let empty = SampleSet::new(vec![], "p").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.min(), None);
        assert_eq!(empty.mean(), None);
        assert_eq!(empty.distinct_count(), 0);

        let single = SampleSet::new(vec![3.5], "p").unwrap();
        assert_eq!(single.variance(), None);
        assert_eq!(single.distinct_count(), 1);
    }

    #[test]
    fn test_sorted_does_not_mutate() {
        let set = SampleSet::new(vec![3.0, 1.0, 2.0], "p").unwrap();
        assert_eq!(set.sorted(), vec![1.0, 2.0, 3.0]);
        assert_eq!(set.as_slice(), &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_serde_validates() {
        let set: SampleSet = serde_json::from_str("[1.0, 2.5]").unwrap();
        assert_eq!(set.as_slice(), &[1.0, 2.5]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1.0,2.5]");
    }
}
