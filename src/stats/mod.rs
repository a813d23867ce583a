//! Stats module - Statistical calculations

mod calculator;

pub(crate) use calculator::bounded_mean;
pub use calculator::{AnalyticsStats, StatsCalculator};
