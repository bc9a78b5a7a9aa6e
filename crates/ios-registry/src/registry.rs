//! Registry interface and the in-memory implementation

use crate::{DeviceRecord, RegistryError};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// Read access to the latest device snapshots, keyed by device name
///
/// Implementations must tolerate concurrent readers.
pub trait DeviceRegistry: Send + Sync {
    /// All known devices
    fn devices(&self) -> BTreeMap<String, DeviceRecord>;

    /// Snapshot of a single device, if it is still registered
    fn device(&self, name: &str) -> Option<DeviceRecord>;
}

/// Registry held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    devices: RwLock<BTreeMap<String, DeviceRecord>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from existing records, validating each one
    pub fn from_devices(
        devices: impl IntoIterator<Item = (String, DeviceRecord)>,
    ) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for (name, record) in devices {
            registry.upsert(&name, record)?;
        }
        Ok(registry)
    }

    /// Insert or wholesale replace the record stored under `name`
    pub fn upsert(&self, name: &str, record: DeviceRecord) -> Result<(), RegistryError> {
        record.validate(name)?;

        let mut devices = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        if devices.insert(name.to_string(), record).is_none() {
            tracing::info!("Registered iOS device {}", name);
        } else {
            tracing::debug!("Updated iOS device {}", name);
        }
        Ok(())
    }

    /// Remove a device, returning its last record
    pub fn remove(&self, name: &str) -> Option<DeviceRecord> {
        let removed = self
            .devices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
        if removed.is_some() {
            tracing::info!("Removed iOS device {}", name);
        }
        removed
    }

    /// Replace the full device set at once
    pub(crate) fn replace_all(&self, devices: BTreeMap<String, DeviceRecord>) {
        *self.devices.write().unwrap_or_else(PoisonError::into_inner) = devices;
    }

    pub fn len(&self) -> usize {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DeviceRegistry for InMemoryRegistry {
    fn devices(&self) -> BTreeMap<String, DeviceRecord> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn device(&self, name: &str) -> Option<DeviceRecord> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}
