//! Error Module
//! Single error type shared by processing, statistics and chart rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("Invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalyticsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AnalyticsError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
