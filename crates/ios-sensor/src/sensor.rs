//! Battery sensor entity for one iOS device

use crate::{SensorError, SensorKind, icon};
use ios_registry::{BatteryState, DeviceRecord, DeviceRegistry};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// State reported by a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SensorState {
    /// Charge percentage
    Level(u8),
    /// Charging lifecycle
    State(BatteryState),
}

impl SensorState {
    fn read(kind: SensorKind, device: &DeviceRecord) -> Self {
        match kind {
            SensorKind::Level => SensorState::Level(device.battery.level),
            SensorKind::State => SensorState::State(device.battery.state),
        }
    }
}

impl fmt::Display for SensorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorState::Level(level) => write!(f, "{}", level),
            SensorState::State(state) => f.write_str(state.as_str()),
        }
    }
}

/// Everything the hub publishes for one sensor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityState {
    pub name: String,
    pub unique_id: String,
    pub state: SensorState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub icon: String,
    pub attributes: BTreeMap<&'static str, Value>,
    pub available: bool,
}

/// Sensor exposing the battery level or state of one registered device
pub struct DeviceBatterySensor {
    kind: SensorKind,
    device_key: String,
    registry: Arc<dyn DeviceRegistry>,
    device: DeviceRecord,
    state: SensorState,
    available: bool,
}

impl DeviceBatterySensor {
    /// Create a sensor for the device registered under `device_key`
    ///
    /// The device is re-read from the registry straight away, so a device
    /// that has already vanished is reported here rather than on first poll.
    pub fn new(
        kind: SensorKind,
        device_key: &str,
        device: DeviceRecord,
        registry: Arc<dyn DeviceRegistry>,
    ) -> Result<Self, SensorError> {
        let state = SensorState::read(kind, &device);
        let mut sensor = Self {
            kind,
            device_key: device_key.to_string(),
            registry,
            device,
            state,
            available: true,
        };
        sensor.refresh()?;
        Ok(sensor)
    }

    /// Re-read the device record, replacing the cached snapshot
    ///
    /// If the device is gone the sensor turns unavailable and keeps its last
    /// snapshot until a later refresh finds the device again.
    pub fn refresh(&mut self) -> Result<(), SensorError> {
        let Some(device) = self.registry.device(&self.device_key) else {
            if self.available {
                tracing::error!(
                    "iOS device {} disappeared from the registry, {} sensor unavailable",
                    self.device_key,
                    self.kind
                );
            }
            self.available = false;
            return Err(SensorError::DeviceMissing(self.device_key.clone()));
        };

        if !self.available {
            tracing::info!("iOS device {} is back", self.device_key);
        }

        self.state = SensorState::read(self.kind, &device);
        self.device = device;
        self.available = true;
        tracing::trace!("Refreshed {}: {}", self.unique_id(), self.state);
        Ok(())
    }

    /// Display name, following renames pushed by the device
    pub fn name(&self) -> String {
        format!("{} {}", self.device.device.name, self.kind.label())
    }

    pub fn state_value(&self) -> SensorState {
        self.state
    }

    /// Identifier that survives device renames
    pub fn unique_id(&self) -> String {
        format!(
            "sensor_ios_battery_{}_{}",
            self.kind.as_str(),
            self.device.device_id
        )
    }

    pub fn unit(&self) -> Option<&'static str> {
        self.kind.unit()
    }

    /// Device details, identical for both sensor kinds
    pub fn extra_attributes(&self) -> BTreeMap<&'static str, Value> {
        let device = &self.device.device;
        let battery = &self.device.battery;

        BTreeMap::from([
            ("Battery State", json!(battery.state.as_str())),
            ("Battery Level", json!(battery.level)),
            ("Device Type", json!(device.device_type)),
            ("Device Name", json!(device.name)),
            ("Device Version", json!(device.system_version)),
        ])
    }

    pub fn icon(&self) -> String {
        icon::resolve_icon(
            self.device.battery.level,
            self.device.battery.state,
            self.kind,
        )
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Registry key the sensor looks its device up by
    pub fn device_key(&self) -> &str {
        &self.device_key
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Last device record read from the registry
    pub fn device(&self) -> &DeviceRecord {
        &self.device
    }

    pub fn snapshot(&self) -> EntityState {
        EntityState {
            name: self.name(),
            unique_id: self.unique_id(),
            state: self.state,
            unit: self.unit(),
            icon: self.icon(),
            attributes: self.extra_attributes(),
            available: self.available,
        }
    }
}

impl fmt::Debug for DeviceBatterySensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceBatterySensor")
            .field("kind", &self.kind)
            .field("device_key", &self.device_key)
            .field("state", &self.state)
            .field("available", &self.available)
            .finish_non_exhaustive()
    }
}
