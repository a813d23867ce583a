//! Chart Dataset Module
//! Plain serializable chart series.

use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub x: f64,
    pub y: f64,
}

/// A labelled series of points with a named colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<ChartDataPoint>,
    pub color: String,
}

impl ChartDataset {
    /// Build a series using each value's index as its x coordinate.
    pub fn from_values(label: impl Into<String>, color: impl Into<String>, values: &[f64]) -> Self {
        let data = values
            .iter()
            .enumerate()
            .map(|(i, &y)| ChartDataPoint { x: i as f64, y })
            .collect();
        Self {
            label: label.into(),
            data,
            color: color.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map(|p| p.y).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
