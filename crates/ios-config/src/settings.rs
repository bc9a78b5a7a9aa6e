//! Configuration sections

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Where the device registry lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Companion app configuration file
    #[serde(default = "default_registry_path")]
    pub path: PathBuf,
}

fn default_registry_path() -> PathBuf {
    PathBuf::from(crate::CONFIG_DIR).join("ios.conf")
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: default_registry_path(),
        }
    }
}

/// Polling schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Seconds between refreshes
    #[serde(default = "default_interval")]
    pub interval_secs: u64,

    /// Whether device discovery has run; no sensors are set up otherwise
    #[serde(default = "default_discovery")]
    pub discovery: bool,
}

fn default_interval() -> u64 {
    30
}

fn default_discovery() -> bool {
    true
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            discovery: default_discovery(),
        }
    }
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}
