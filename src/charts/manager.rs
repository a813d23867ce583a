//! Chart Data Manager
//! Runs the generate -> process -> summarize pipeline and holds its latest result.

use crate::charts::ChartDataset;
use crate::config::AnalyticsConfig;
use crate::data::DataProcessor;
use crate::error::{AnalyticsError, Result};
use crate::stats::{AnalyticsStats, StatsCalculator};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, warn};

pub const SAMPLE_DATASET_LABEL: &str = "Sample Analytics Data";
pub const SAMPLE_DATASET_COLOR: &str = "blue";

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub dataset: ChartDataset,
    pub stats: AnalyticsStats,
}

/// Result sent back from the background thread
enum JobResult {
    Complete(AnalyticsSnapshot),
    Error(String),
}

/// Holds the datasets and statistics currently on display and refreshes
/// them off the calling thread.
pub struct ChartDataManager {
    pub datasets: Vec<ChartDataset>,
    pub stats: AnalyticsStats,
    pub is_loading: bool,
    pub last_error: Option<String>,

    config: AnalyticsConfig,
    refresh_count: u64,
    job_rx: Option<Receiver<JobResult>>,
}

impl Default for ChartDataManager {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}

impl ChartDataManager {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            datasets: Vec::new(),
            stats: AnalyticsStats::default(),
            is_loading: false,
            last_error: None,
            config,
            refresh_count: 0,
            job_rx: None,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Run the whole pipeline synchronously.
    ///
    /// Zero samples produce an empty dataset with all-zero statistics.
    pub fn build_snapshot(config: &AnalyticsConfig) -> Result<AnalyticsSnapshot> {
        config.validate()?;
        let count = i64::try_from(config.sample_count).map_err(|_| {
            AnalyticsError::invalid(format!("sample count too large: {}", config.sample_count))
        })?;

        let raw = DataProcessor::generate_sample_data_with(count, &config.sample)?;
        let processed = DataProcessor::process_raw_data_with(&raw, &config.processing)?;

        let stats = if processed.is_empty() {
            AnalyticsStats::default()
        } else {
            StatsCalculator::compute_stats(&processed)?
        };
        let dataset =
            ChartDataset::from_values(SAMPLE_DATASET_LABEL, SAMPLE_DATASET_COLOR, &processed);

        Ok(AnalyticsSnapshot { dataset, stats })
    }

    /// Start a refresh in a background thread. Ignored while one is running.
    pub fn generate_sample_data(&mut self) {
        if self.is_loading {
            return;
        }

        // Each refresh gets its own seed so the chart changes, reproducibly.
        let mut config = self.config.clone();
        config.sample.seed = config.sample.seed.wrapping_add(self.refresh_count);
        self.refresh_count += 1;

        let (tx, rx) = channel();
        self.job_rx = Some(rx);
        self.is_loading = true;
        debug!(seed = config.sample.seed, "Starting analytics refresh");

        thread::spawn(move || {
            let result = match Self::build_snapshot(&config) {
                Ok(snapshot) => JobResult::Complete(snapshot),
                Err(e) => JobResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    pub fn refresh_data(&mut self) {
        self.generate_sample_data();
    }

    /// Apply a finished refresh without blocking. Returns true if state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.job_rx.take() else {
            return false;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.apply(result);
                true
            }
            Err(TryRecvError::Empty) => {
                self.job_rx = Some(rx);
                false
            }
            Err(TryRecvError::Disconnected) => {
                self.apply(JobResult::Error(
                    "background refresh ended without a result".to_string(),
                ));
                true
            }
        }
    }

    /// Block until the running refresh finishes.
    pub fn wait(&mut self) {
        let Some(rx) = self.job_rx.take() else {
            return;
        };

        let result = rx.recv().unwrap_or_else(|_| {
            JobResult::Error("background refresh ended without a result".to_string())
        });
        self.apply(result);
    }

    fn apply(&mut self, result: JobResult) {
        self.is_loading = false;
        match result {
            JobResult::Complete(snapshot) => {
                debug!(points = snapshot.stats.data_count, "Analytics refresh complete");
                self.datasets = vec![snapshot.dataset];
                self.stats = snapshot.stats;
                self.last_error = None;
            }
            JobResult::Error(error) => {
                warn!(%error, "Analytics refresh failed");
                self.last_error = Some(error);
            }
        }
    }
}
