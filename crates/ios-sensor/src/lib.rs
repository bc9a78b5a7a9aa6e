//! Battery sensors for iOS companion app devices
//!
//! Exposes the battery level and charging state of every registered iOS
//! device as read-only sensor entities. Each sensor re-reads its device from
//! the [`DeviceRegistry`](ios_registry::DeviceRegistry) when polled and
//! projects the snapshot into a name, state, unit, icon and attributes.
//!
//! # Example
//!
//! ```
//! use ios_registry::{BatteryState, InMemoryRegistry, mock};
//! use ios_sensor::setup_platform;
//! use std::sync::Arc;
//!
//! let registry = InMemoryRegistry::new();
//! registry
//!     .upsert("Phone", mock::record("Phone", "A1B2", 85, BatteryState::Charging))
//!     .unwrap();
//!
//! let sensors = setup_platform(Arc::new(registry), true).unwrap();
//! assert_eq!(sensors.len(), 2);
//! assert_eq!(sensors[0].name(), "Phone Battery Level");
//! assert_eq!(sensors[0].icon(), "mdi:battery-charging-90");
//! ```

pub mod icon;
mod kind;
mod platform;
mod sensor;

pub use icon::{BatteryIcons, resolve_icon, resolve_icons};
pub use kind::SensorKind;
pub use platform::setup_platform;
pub use sensor::{DeviceBatterySensor, EntityState, SensorState};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    #[error("Unknown sensor kind: {0}")]
    UnknownKind(String),

    #[error("Device no longer registered: {0}")]
    DeviceMissing(String),
}

/// Sensor Result type
pub type Result<T> = std::result::Result<T, SensorError>;
