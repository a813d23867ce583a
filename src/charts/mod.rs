//! Charts module - Chart data pipeline and rendering

mod dataset;
mod manager;
mod renderer;

pub use dataset::{ChartDataPoint, ChartDataset};
pub use manager::{AnalyticsSnapshot, ChartDataManager};
pub use renderer::ChartRenderer;
