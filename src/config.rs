//! Service configuration loaded from an optional TOML file.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::geocoder::NOMINATIM_URL;
use crate::registry::{DatasetEntry, DatasetRegistry};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    /// Overrides the built-in TIGERweb datasets when non-empty
    pub datasets: Vec<DatasetEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Per-request timeout for the geocoder and each feature query
    pub timeout_secs: u64,
    /// Client identifier sent to upstream services
    pub user_agent: String,
    pub nominatim_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: format!("districts/{}", env!("CARGO_PKG_VERSION")),
            nominatim_url: NOMINATIM_URL.to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the dataset registry, falling back to TIGERweb
    pub fn registry(&self) -> Result<DatasetRegistry, ConfigError> {
        if self.datasets.is_empty() {
            DatasetRegistry::tiger_web()
        } else {
            DatasetRegistry::from_entries(self.datasets.clone())
        }
    }
}
