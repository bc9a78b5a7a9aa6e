//! Sample device records for tests and demos
//!
//! ```
//! use ios_registry::{BatteryState, mock};
//!
//! let record = mock::record("Phone", "A1B2", 85, BatteryState::Charging);
//! assert_eq!(record.device.name, "Phone");
//! ```

use crate::{AppInfo, BatteryInfo, BatteryState, DeviceInfo, DeviceRecord};

/// Build an iPhone record with the given battery reading
pub fn record(name: &str, device_id: &str, level: u8, state: BatteryState) -> DeviceRecord {
    DeviceRecord {
        device_id: device_id.to_string(),
        device: DeviceInfo {
            name: name.to_string(),
            device_type: "iPhone".to_string(),
            system_version: "11.2".to_string(),
            system_name: Some("iOS".to_string()),
            model: Some("iPhone".to_string()),
            localized_model: Some("iPhone".to_string()),
            permanent_id: None,
        },
        battery: BatteryInfo { level, state },
        app: Some(AppInfo {
            bundle_identifier: "io.example.companion".to_string(),
            bundle_version: "100".to_string(),
            version: Some("1.0.0".to_string()),
        }),
        push_id: None,
    }
}

/// Build an iPad record with the given battery reading
pub fn tablet(name: &str, device_id: &str, level: u8, state: BatteryState) -> DeviceRecord {
    let mut record = record(name, device_id, level, state);
    record.device.device_type = "iPad".to_string();
    record.device.model = Some("iPad".to_string());
    record.device.localized_model = Some("iPad".to_string());
    record
}

/// A small set of devices covering every battery state
pub fn household() -> Vec<(String, DeviceRecord)> {
    vec![
        (
            "Work iPhone".to_string(),
            record("Work iPhone", "5F1A", 85, BatteryState::Charging),
        ),
        (
            "Personal iPhone".to_string(),
            record("Personal iPhone", "22C7", 47, BatteryState::Unplugged),
        ),
        (
            "Living Room iPad".to_string(),
            tablet("Living Room iPad", "9B03", 100, BatteryState::Full),
        ),
        (
            "Old iPod".to_string(),
            record("Old iPod", "0E44", 0, BatteryState::Unknown),
        ),
    ]
}
