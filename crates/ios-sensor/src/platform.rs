//! Platform setup

use crate::{DeviceBatterySensor, SensorError, SensorKind};
use ios_registry::DeviceRegistry;
use std::sync::Arc;

/// Create the battery sensors for every registered device
///
/// Nothing is created until device discovery has run. Otherwise each device
/// gets a level sensor followed by a state sensor, in device name order.
/// A device removed while setup runs is skipped.
pub fn setup_platform(
    registry: Arc<dyn DeviceRegistry>,
    discovered: bool,
) -> Result<Vec<DeviceBatterySensor>, SensorError> {
    if !discovered {
        tracing::debug!("iOS device discovery has not run, no battery sensors created");
        return Ok(Vec::new());
    }

    let devices = registry.devices();
    let mut sensors = Vec::with_capacity(devices.len() * SensorKind::ALL.len());

    for (name, device) in devices {
        for kind in SensorKind::ALL {
            match DeviceBatterySensor::new(kind, &name, device.clone(), Arc::clone(&registry)) {
                Ok(sensor) => sensors.push(sensor),
                Err(SensorError::DeviceMissing(_)) => {
                    tracing::warn!("iOS device {} removed during setup, skipping", name);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
    }

    tracing::info!("Set up {} iOS battery sensor(s)", sensors.len());
    Ok(sensors)
}
