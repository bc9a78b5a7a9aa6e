//! Device registry for the iOS companion app
//!
//! Holds the latest telemetry snapshot pushed by each registered iOS device,
//! keyed by device name. Sensors and other consumers only ever read from the
//! registry through the [`DeviceRegistry`] trait.
//!
//! # Example
//!
//! ```
//! use ios_registry::mock;
//! use ios_registry::{BatteryState, DeviceRegistry, InMemoryRegistry};
//!
//! let registry = InMemoryRegistry::new();
//! registry
//!     .upsert("Phone", mock::record("Phone", "A1B2", 80, BatteryState::Charging))
//!     .unwrap();
//!
//! let device = registry.device("Phone").unwrap();
//! assert_eq!(device.battery.level, 80);
//! ```

pub mod mock;
mod record;
mod registry;
mod store;

pub use record::{AppInfo, BatteryInfo, BatteryState, DeviceInfo, DeviceRecord};
pub use registry::{DeviceRegistry, InMemoryRegistry};
pub use store::{CONFIGURATION_FILE, FileRegistry};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid device record for {name}: {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registry Result type
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::InvalidRecord {
            name: "Phone".to_string(),
            reason: "battery level 120 out of range".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Phone"));
        assert!(msg.contains("out of range"));
    }
}
