//! Registry backends the poller can read from

use anyhow::{Context, Result};
use ios_registry::{BatteryState, DeviceRegistry, FileRegistry, InMemoryRegistry, mock};
use std::path::Path;
use std::sync::Arc;

/// Registry the sensors are attached to
pub enum RegistrySource {
    /// Companion app configuration file, re-read every tick
    File(Arc<FileRegistry>),
    /// Sample devices whose batteries drift on every tick
    Demo(Arc<InMemoryRegistry>),
}

impl RegistrySource {
    pub fn open_file(path: &Path) -> Result<Self> {
        let registry = FileRegistry::open(path)
            .with_context(|| format!("Failed to open device registry {}", path.display()))?;
        tracing::info!(
            "Device registry {} holds {} device(s)",
            path.display(),
            registry.len()
        );
        Ok(RegistrySource::File(Arc::new(registry)))
    }

    pub fn demo() -> Result<Self> {
        let registry = InMemoryRegistry::from_devices(mock::household())
            .context("Failed to seed demo registry")?;
        Ok(RegistrySource::Demo(Arc::new(registry)))
    }

    /// Shared handle handed to the sensors
    pub fn handle(&self) -> Arc<dyn DeviceRegistry> {
        match self {
            RegistrySource::File(registry) => Arc::clone(registry) as Arc<dyn DeviceRegistry>,
            RegistrySource::Demo(registry) => Arc::clone(registry) as Arc<dyn DeviceRegistry>,
        }
    }

    /// Bring the registry up to date before sensors refresh
    pub fn sync(&self) -> Result<()> {
        match self {
            RegistrySource::File(registry) => registry
                .reload()
                .with_context(|| format!("Failed to reload {}", registry.path().display())),
            RegistrySource::Demo(registry) => {
                for (name, mut record) in registry.devices() {
                    drift(&mut record.battery.level, &mut record.battery.state);
                    registry.upsert(&name, record)?;
                }
                Ok(())
            }
        }
    }
}

/// Move a simulated battery one percent along its current state
fn drift(level: &mut u8, state: &mut BatteryState) {
    match *state {
        BatteryState::Charging if *level >= 99 => {
            *level = 100;
            *state = BatteryState::Full;
        }
        BatteryState::Charging => *level += 1,
        BatteryState::Unplugged if *level == 0 => *state = BatteryState::Charging,
        BatteryState::Unplugged => *level -= 1,
        BatteryState::Full => *state = BatteryState::Unplugged,
        BatteryState::Unknown => {}
    }
}
