//! Configuration management for the iOS battery sensors
//!
//! TOML configuration with a user file overriding the system file, and
//! built-in defaults when neither exists.

mod settings;

pub use settings::{LoggingConfig, PollingConfig, RegistryConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Standard configuration paths
pub const CONFIG_DIR: &str = "/etc/ios-sensor";
pub const USER_CONFIG_DIR: &str = ".config/ios-sensor";
pub const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorConfig {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SensorConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// The system file is read first and the user file is layered on top.
    pub fn load_default() -> Result<Self, ConfigError> {
        let mut layers = Vec::new();

        let system_config = Path::new(CONFIG_DIR).join(CONFIG_FILE);
        if system_config.exists() {
            layers.push(system_config);
        }

        if let Some(user_config) = Self::user_config_path().filter(|p| p.exists()) {
            layers.push(user_config);
        }

        if layers.is_empty() {
            tracing::warn!("No configuration file found, using defaults");
            return Ok(Self::default());
        }

        Self::load_layered(&layers)
    }

    /// Load several files, later files overriding earlier ones key by key
    pub fn load_layered(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut merged = toml::Value::Table(toml::Table::new());

        for path in paths {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.clone()));
            }
            let contents = std::fs::read_to_string(path)?;
            let layer: toml::Value = toml::from_str(&contents)?;
            merge_toml(&mut merged, layer);
            tracing::debug!("Configuration layer loaded from {}", path.display());
        }

        let config: Self = merged.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values the poller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "polling.interval_secs must be greater than zero".to_string(),
            ));
        }

        if self.registry.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("registry.path is empty".to_string()));
        }

        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(USER_CONFIG_DIR).join(CONFIG_FILE))
    }
}

/// Helper function to merge TOML values
pub fn merge_toml(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(&key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key, value);
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
