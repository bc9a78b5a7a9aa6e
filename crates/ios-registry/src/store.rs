//! Registry persisted in the companion app configuration file
//!
//! The file is a JSON document of the form `{"devices": {"<name>": {...}}}`.

use crate::registry::InMemoryRegistry;
use crate::{DeviceRecord, DeviceRegistry, RegistryError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name of the companion app configuration
pub const CONFIGURATION_FILE: &str = "ios.conf";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigurationFile {
    #[serde(default)]
    devices: BTreeMap<String, DeviceRecord>,
}

/// File-backed registry
#[derive(Debug)]
pub struct FileRegistry {
    path: PathBuf,
    devices: InMemoryRegistry,
}

impl FileRegistry {
    /// Open the registry file; a missing file yields an empty registry
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let registry = Self {
            path: path.into(),
            devices: InMemoryRegistry::new(),
        };
        registry.reload()?;
        Ok(registry)
    }

    /// Re-read the file, replacing every record
    pub fn reload(&self) -> Result<(), RegistryError> {
        let devices = Self::read_file(&self.path)?;
        tracing::debug!(
            "Loaded {} device(s) from {}",
            devices.len(),
            self.path.display()
        );
        self.devices.replace_all(devices);
        Ok(())
    }

    /// Store a record pushed by a device and persist the registry
    ///
    /// The file is written first; memory is only updated once it succeeds.
    pub fn upsert(&self, name: &str, record: DeviceRecord) -> Result<(), RegistryError> {
        record.validate(name)?;

        let mut devices = self.devices.devices();
        devices.insert(name.to_string(), record.clone());
        self.write_file(devices)?;

        self.devices.upsert(name, record)
    }

    /// Remove a device and persist the registry
    pub fn remove(&self, name: &str) -> Result<Option<DeviceRecord>, RegistryError> {
        let mut devices = self.devices.devices();
        if devices.remove(name).is_none() {
            return Ok(None);
        }
        self.write_file(devices)?;

        Ok(self.devices.remove(name))
    }

    /// Write the registry back to disk
    pub fn save(&self) -> Result<(), RegistryError> {
        self.write_file(self.devices.devices())
    }

    fn write_file(&self, devices: BTreeMap<String, DeviceRecord>) -> Result<(), RegistryError> {
        let file = ConfigurationFile { devices };
        let contents = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, contents)?;
        tracing::debug!("Registry saved to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    fn read_file(path: &Path) -> Result<BTreeMap<String, DeviceRecord>, RegistryError> {
        if !path.exists() {
            tracing::warn!("Registry file {} not found, starting empty", path.display());
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let file: ConfigurationFile = serde_json::from_str(&contents)?;
        for (name, record) in &file.devices {
            record.validate(name)?;
        }
        Ok(file.devices)
    }
}

impl DeviceRegistry for FileRegistry {
    fn devices(&self) -> BTreeMap<String, DeviceRecord> {
        self.devices.devices()
    }

    fn device(&self, name: &str) -> Option<DeviceRecord> {
        self.devices.device(name)
    }
}
