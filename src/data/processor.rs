//! Data Processor Module
//! Handles data cleaning, smoothing and seeded sample generation.

use crate::config::{ProcessingConfig, SampleConfig};
use crate::error::{AnalyticsError, Result};
use crate::stats::bounded_mean;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

/// Below this length smoothing runs on the calling thread.
const PARALLEL_THRESHOLD: usize = 4096;

/// Stateless cleaning and generation operations over `f64` sequences.
pub struct DataProcessor;

impl DataProcessor {
    /// Clean and smooth raw data with the default [`ProcessingConfig`].
    ///
    /// Non-finite values are dropped, the rest go through a centered moving
    /// average (window 3) and are rounded to 2 decimals. Empty in, empty out.
    pub fn process_raw_data(raw: &[f64]) -> Vec<f64> {
        Self::process(raw, &ProcessingConfig::default())
    }

    /// Clean and smooth raw data with explicit settings.
    pub fn process_raw_data_with(raw: &[f64], config: &ProcessingConfig) -> Result<Vec<f64>> {
        config.validate()?;
        Ok(Self::process(raw, config))
    }

    fn process(raw: &[f64], config: &ProcessingConfig) -> Vec<f64> {
        let finite: Vec<f64> = raw.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.len() < raw.len() {
            debug!(
                dropped = raw.len() - finite.len(),
                "Dropped non-finite values from raw data"
            );
        }

        let n = finite.len();
        let window = config.smoothing_window.max(1);
        let left = (window - 1) / 2;
        let right = window / 2;
        let factor = 10f64.powi(config.decimals as i32);

        let smooth_at = |i: usize| -> f64 {
            let start = i.saturating_sub(left);
            let end = (i + right + 1).min(n);
            round_to(bounded_mean(&finite[start..end]), factor)
        };

        if n >= PARALLEL_THRESHOLD {
            (0..n).into_par_iter().map(smooth_at).collect()
        } else {
            (0..n).map(smooth_at).collect()
        }
    }

    /// Generate `count` sample values with the default [`SampleConfig`].
    pub fn generate_sample_data(count: i64) -> Result<Vec<f64>> {
        Self::generate_sample_data_with(count, &SampleConfig::default())
    }

    /// Generate `count` values uniformly in `[min_value, max_value)`.
    ///
    /// The sequence is fully determined by `config.seed`.
    pub fn generate_sample_data_with(count: i64, config: &SampleConfig) -> Result<Vec<f64>> {
        let count = usize::try_from(count).map_err(|_| {
            AnalyticsError::invalid(format!("sample count must be non-negative, got {count}"))
        })?;
        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let values: Vec<f64> = (0..count)
            .map(|_| rng.random_range(config.min_value..config.max_value))
            .collect();

        debug!(count, seed = config.seed, "Generated sample data");
        Ok(values)
    }
}

fn round_to(value: f64, factor: f64) -> f64 {
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_process_empty() {
        assert!(DataProcessor::process_raw_data(&[]).is_empty());
    }

    #[test]
    fn test_process_smooths_with_truncated_edges() {
        let out = DataProcessor::process_raw_data(&[1.0, 2.0, 6.0, 4.0]);
        // edges average over two values, interior over three
        assert_eq!(out, vec![1.5, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_process_drops_non_finite() {
        let out = DataProcessor::process_raw_data(&[f64::NAN, 5.0, f64::INFINITY, 5.0]);
        assert_eq!(out, vec![5.0, 5.0]);

        let all_bad = DataProcessor::process_raw_data(&[f64::NAN, f64::NEG_INFINITY]);
        assert!(all_bad.is_empty());
    }

    #[test]
    fn test_window_one_only_rounds() {
        let config = ProcessingConfig {
            smoothing_window: 1,
            decimals: 1,
        };
        let out = DataProcessor::process_raw_data_with(&[1.26, 3.0, -0.04], &config).unwrap();
        assert_eq!(out.len(), 3);
        assert_abs_diff_eq!(out[0], 1.3, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_even_window_leans_right() {
        let config = ProcessingConfig {
            smoothing_window: 2,
            decimals: 3,
        };
        let out = DataProcessor::process_raw_data_with(&[0.0, 2.0, 4.0], &config).unwrap();
        assert_eq!(out, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_invalid_processing_config() {
        let config = ProcessingConfig {
            smoothing_window: 0,
            decimals: 2,
        };
        let err = DataProcessor::process_raw_data_with(&[1.0], &config).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let raw: Vec<f64> = (0..PARALLEL_THRESHOLD + 10).map(|i| (i % 17) as f64).collect();
        let out = DataProcessor::process_raw_data(&raw);
        assert_eq!(out.len(), raw.len());
        assert_abs_diff_eq!(out[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[17], (16.0 + 0.0 + 1.0) / 3.0, epsilon = 0.005);
    }

    #[test]
    fn test_huge_values_stay_finite() {
        let out = DataProcessor::process_raw_data(&[1e307]);
        assert_eq!(out, vec![1e307]);
    }

    #[test]
    fn test_huge_windows_stay_finite() {
        let out = DataProcessor::process_raw_data(&[f64::MAX; 3]);
        assert_eq!(out, vec![f64::MAX; 3]);

        let out = DataProcessor::process_raw_data(&[f64::MAX, -f64::MAX, f64::MAX, f64::MAX]);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_generate_lengths() {
        assert!(DataProcessor::generate_sample_data(0).unwrap().is_empty());
        assert_eq!(DataProcessor::generate_sample_data(1).unwrap().len(), 1);
        assert_eq!(DataProcessor::generate_sample_data(30).unwrap().len(), 30);
    }

    #[test]
    fn test_generate_negative_count() {
        let err = DataProcessor::generate_sample_data(-1).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
    }

    #[test]
    fn test_generate_is_deterministic_and_in_range() {
        let config = SampleConfig {
            seed: 9,
            min_value: -1.0,
            max_value: 1.0,
        };
        let a = DataProcessor::generate_sample_data_with(50, &config).unwrap();
        let b = DataProcessor::generate_sample_data_with(50, &config).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (-1.0..1.0).contains(v)));

        let other = DataProcessor::generate_sample_data_with(
            50,
            &SampleConfig { seed: 10, ..config },
        )
        .unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn test_generate_rejects_bad_range() {
        let config = SampleConfig {
            seed: 1,
            min_value: 3.0,
            max_value: 2.0,
        };
        assert!(DataProcessor::generate_sample_data_with(3, &config).is_err());
    }

    #[test]
    fn test_generate_rejects_overflowing_span() {
        let config = SampleConfig {
            seed: 1,
            min_value: -f64::MAX,
            max_value: f64::MAX,
        };
        let err = DataProcessor::generate_sample_data_with(3, &config).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));

        let wide_but_finite = SampleConfig {
            seed: 1,
            min_value: -f64::MAX / 4.0,
            max_value: f64::MAX / 4.0,
        };
        let data = DataProcessor::generate_sample_data_with(3, &wide_but_finite).unwrap();
        assert_eq!(data.len(), 3);
    }
}
