//! Data Analytics - numeric sequence processing and summary statistics
//!
//! Pure functions over `f64` sequences (cleaning/smoothing, mean, min, max,
//! seeded sample generation) plus the chart-data pipeline built on top of them.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod stats;

pub use charts::{AnalyticsSnapshot, ChartDataManager, ChartDataPoint, ChartDataset, ChartRenderer};
pub use config::{AnalyticsConfig, ProcessingConfig, SampleConfig};
pub use data::DataProcessor;
pub use error::{AnalyticsError, Result};
pub use stats::{AnalyticsStats, StatsCalculator};
