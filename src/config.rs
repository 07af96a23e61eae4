use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Process configuration, loaded once before startup.
///
/// The city list is the fixed, ordered set of locations to initialize and
/// track; the provider section points at the external weather API.
///
/// # Examples
///
/// ```
/// use weather_stats::Config;
///
/// let config: Config = serde_json::from_str(r#"{
///     "cities": ["Novi Sad", "Belgrade"],
///     "provider": { "base_url": "https://weather.example.com/api" }
/// }"#).unwrap();
/// assert_eq!(config.cities.len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub cities: Vec<String>,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Root of the provider API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout towards the provider, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Loads the configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
