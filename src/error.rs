//! Error types for upstream services and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to the geocoder or a boundary feature service
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} reported error {code}: {message}")]
    Service {
        url: String,
        code: i64,
        message: String,
    },

    #[error("invalid coordinate in geocoder response: {0}")]
    InvalidCoordinate(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Classify a failure while reading a JSON response body
    pub(crate) fn from_body(url: String, source: reqwest::Error) -> Self {
        if source.is_decode() {
            UpstreamError::Decode { url, source }
        } else {
            UpstreamError::Http { url, source }
        }
    }
}

/// Invalid or unreadable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid URL for dataset {dataset}: {source}")]
    InvalidUrl {
        dataset: String,
        #[source]
        source: url::ParseError,
    },

    #[error("dataset {category}.{dataset} is defined more than once")]
    DuplicateDataset { category: String, dataset: String },
}
