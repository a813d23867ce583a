//! Configuration Module
//! Settings for data processing, sample generation and the dashboard pipeline.

use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};

/// Number of samples the dashboard pipeline generates per refresh.
pub const DEFAULT_SAMPLE_COUNT: usize = 30;

/// How raw data is cleaned and smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Width of the centered moving average. 1 leaves values untouched.
    pub smoothing_window: usize,
    /// Decimal places kept after smoothing.
    pub decimals: u32,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            smoothing_window: 3,
            decimals: 2,
        }
    }
}

impl ProcessingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.smoothing_window == 0 {
            return Err(AnalyticsError::invalid("smoothing_window must be at least 1"));
        }
        // 10^16 already exceeds f64 integer precision
        if self.decimals > 15 {
            return Err(AnalyticsError::invalid(format!(
                "decimals must be at most 15, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

/// Seeded uniform sample generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub seed: u64,
    /// Inclusive lower bound.
    pub min_value: f64,
    /// Exclusive upper bound.
    pub max_value: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            min_value: 10.0,
            max_value: 100.0,
        }
    }
}

impl SampleConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_value.is_finite() || !self.max_value.is_finite() {
            return Err(AnalyticsError::invalid("sample range bounds must be finite"));
        }
        if self.min_value >= self.max_value {
            return Err(AnalyticsError::invalid(format!(
                "sample range is empty: [{}, {})",
                self.min_value, self.max_value
            )));
        }
        if !(self.max_value - self.min_value).is_finite() {
            return Err(AnalyticsError::invalid(format!(
                "sample range [{}, {}) is too wide",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

/// Full pipeline settings used by [`crate::ChartDataManager`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub processing: ProcessingConfig,
    pub sample: SampleConfig,
    pub sample_count: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig::default(),
            sample: SampleConfig::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl AnalyticsConfig {
    /// Parse from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalyticsConfig =
            serde_json::from_str(json).map_err(AnalyticsError::Config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.processing.validate()?;
        self.sample.validate()
    }
}
