//! Device records as pushed by the iOS companion app

use crate::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Battery charging lifecycle reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatteryState {
    #[serde(rename = "Full")]
    Full,
    #[serde(rename = "Charging")]
    Charging,
    /// On battery, not connected to power
    #[serde(rename = "Not Charging")]
    Unplugged,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl BatteryState {
    /// Wire name used by the companion app
    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryState::Full => "Full",
            BatteryState::Charging => "Charging",
            BatteryState::Unplugged => "Not Charging",
            BatteryState::Unknown => "Unknown",
        }
    }

    /// Parse from the wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Full" => Some(BatteryState::Full),
            "Charging" => Some(BatteryState::Charging),
            "Not Charging" => Some(BatteryState::Unplugged),
            "Unknown" => Some(BatteryState::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for BatteryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Battery sub-record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryInfo {
    /// Charge percentage (0-100)
    pub level: u8,
    pub state: BatteryState,
}

/// Hardware and OS details of the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub system_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_model: Option<String>,
    #[serde(default, rename = "permanentID", skip_serializing_if = "Option::is_none")]
    pub permanent_id: Option<String>,
}

/// Companion app build running on the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub bundle_identifier: String,
    pub bundle_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Latest telemetry snapshot of one registered device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub device_id: String,
    pub device: DeviceInfo,
    pub battery: BatteryInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_id: Option<String>,
}

impl DeviceRecord {
    /// Check the record invariants before it enters a registry
    pub fn validate(&self, name: &str) -> Result<(), RegistryError> {
        if self.device_id.trim().is_empty() {
            return Err(RegistryError::InvalidRecord {
                name: name.to_string(),
                reason: "empty device id".to_string(),
            });
        }

        if self.battery.level > 100 {
            return Err(RegistryError::InvalidRecord {
                name: name.to_string(),
                reason: format!("battery level {} out of range", self.battery.level),
            });
        }

        Ok(())
    }
}
