//! Error Types

use thiserror::Error;

/// Failure talking to the remote todo service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status { status: u16, url: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Malformed configuration file
#[derive(Debug, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] pub toml::de::Error);
