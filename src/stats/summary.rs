//! # Summary Statistics
//!
//! Mean, median, and population standard deviation over a value sequence.

use serde::{Deserialize, Serialize};

/// Summary statistics for a non-empty sequence of scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Middle of the sorted values; mean of the two central values for
    /// an even count
    pub median: f64,
    /// Population standard deviation (divisor = n, not n - 1)
    pub std: f64,
}

impl SummaryStats {
    /// Summarize a sequence of values
    ///
    /// Returns `None` only for the empty slice. Full floating precision
    /// is retained; nothing is clamped or rounded.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        };

        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        Some(Self { mean, median, std })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_gives_none() {
        assert!(SummaryStats::from_values(&[]).is_none());
    }

    #[test]
    fn test_single_value() {
        let s = SummaryStats::from_values(&[4.2]).unwrap();
        assert!((s.mean - 4.2).abs() < EPS);
        assert!((s.median - 4.2).abs() < EPS);
        assert!((s.std - 0.0).abs() < EPS);
    }

    #[test]
    fn test_population_std_exact() {
        // Known population std example: mean 5, std exactly 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = SummaryStats::from_values(&values).unwrap();
        assert!((s.mean - 5.0).abs() < EPS);
        assert!((s.std - 2.0).abs() < EPS);
    }

    #[test]
    fn test_median_odd_count() {
        let s = SummaryStats::from_values(&[9.0, 1.0, 5.0]).unwrap();
        assert!((s.median - 5.0).abs() < EPS);
    }

    #[test]
    fn test_median_even_count() {
        let s = SummaryStats::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!((s.median - 2.5).abs() < EPS);
    }

    #[test]
    fn test_mean_between_min_and_max() {
        let values = [0.13, 0.77, 0.5, 0.98, 0.02];
        let s = SummaryStats::from_values(&values).unwrap();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(s.mean >= min && s.mean <= max);
    }
}
