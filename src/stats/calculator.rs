//! Statistics Calculator Module
//! Handles the scalar reductions: mean, maximum and minimum.

use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::fmt;

/// Summary shown on the analytics dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsStats {
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub data_count: usize,
}

impl fmt::Display for AnalyticsStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average: {:.1}", self.average)?;
        writeln!(f, "Maximum: {:.1}", self.maximum)?;
        writeln!(f, "Minimum: {:.1}", self.minimum)?;
        write!(f, "Data Points: {}", self.data_count)
    }
}

/// Stateless reductions over `f64` sequences.
///
/// Every reduction rejects empty input with [`AnalyticsError::InvalidArgument`].
pub struct StatsCalculator;

impl StatsCalculator {
    /// Arithmetic mean (sum divided by count).
    ///
    /// For finite input the result never overflows and always lies within
    /// `[min, max]`. NaN or infinite elements propagate.
    pub fn calculate_average(data: &[f64]) -> Result<f64> {
        ensure_non_empty(data, "average")?;
        if data.iter().all(|v| v.is_finite()) {
            Ok(bounded_mean(data))
        } else {
            Ok(data.iter().mean())
        }
    }

    /// Largest element. NaN elements are skipped unless every element is NaN.
    pub fn find_max_value(data: &[f64]) -> Result<f64> {
        ensure_non_empty(data, "maximum")?;
        Ok(data.iter().copied().fold(f64::NAN, f64::max))
    }

    /// Smallest element. NaN elements are skipped unless every element is NaN.
    pub fn find_min_value(data: &[f64]) -> Result<f64> {
        ensure_non_empty(data, "minimum")?;
        Ok(data.iter().copied().fold(f64::NAN, f64::min))
    }

    /// Compute all dashboard statistics in one call.
    pub fn compute_stats(data: &[f64]) -> Result<AnalyticsStats> {
        Ok(AnalyticsStats {
            average: Self::calculate_average(data)?,
            maximum: Self::find_max_value(data)?,
            minimum: Self::find_min_value(data)?,
            data_count: data.len(),
        })
    }
}

/// Mean of a non-empty slice of finite values, clamped to its extrema.
pub(crate) fn bounded_mean(values: &[f64]) -> f64 {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let mean = values.iter().mean();
    let mean = if mean.is_finite() {
        mean
    } else {
        // Running differences overflowed; average in units of the largest magnitude.
        let scale = lo.abs().max(hi.abs());
        values.iter().map(|v| v / scale).mean() * scale
    };
    mean.clamp(lo, hi)
}

fn ensure_non_empty(data: &[f64], what: &str) -> Result<()> {
    if data.is_empty() {
        return Err(AnalyticsError::invalid(format!(
            "cannot compute {what} of an empty sequence"
        )));
    }
    Ok(())
}
