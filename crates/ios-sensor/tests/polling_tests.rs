//! Integration tests driving sensors the way the hub's scheduler does

use ios_registry::{BatteryState, DeviceRegistry, FileRegistry, InMemoryRegistry, mock};
use ios_sensor::{SensorError, SensorKind, SensorState, resolve_icon, setup_platform};
use std::collections::BTreeSet;
use std::sync::Arc;
use tempfile::TempDir;

/// File-backed registry in a temporary directory
struct RegistryTestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    registry: Arc<FileRegistry>,
}

impl RegistryTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let registry = FileRegistry::open(temp_dir.path().join("ios.conf"))
            .expect("Failed to open registry");

        Self {
            temp_dir,
            registry: Arc::new(registry),
        }
    }

    fn push(&self, name: &str, device_id: &str, level: u8, state: BatteryState) {
        self.registry
            .upsert(name, mock::record(name, device_id, level, state))
            .unwrap();
    }
}

#[test]
fn test_poll_cycle_follows_pushed_telemetry() {
    let env = RegistryTestEnv::new();
    env.push("Phone", "A1", 85, BatteryState::Charging);

    let mut sensors = setup_platform(env.registry.clone(), true).unwrap();
    assert_eq!(sensors.len(), 2);
    assert_eq!(sensors[0].icon(), "mdi:battery-charging-90");
    assert_eq!(sensors[1].icon(), "mdi:power-plug");

    env.push("Phone", "A1", 100, BatteryState::Full);
    for sensor in &mut sensors {
        sensor.refresh().unwrap();
    }

    assert_eq!(sensors[0].state_value(), SensorState::Level(100));
    assert_eq!(sensors[0].icon(), "mdi:battery");
    assert_eq!(sensors[1].state_value(), SensorState::State(BatteryState::Full));
    assert_eq!(sensors[1].icon(), "mdi:power-plug-off");
}

#[test]
fn test_removed_device_reports_error_on_refresh() {
    let env = RegistryTestEnv::new();
    env.push("Phone", "A1", 40, BatteryState::Unplugged);
    env.push("Tablet", "B2", 70, BatteryState::Unplugged);

    let mut sensors = setup_platform(env.registry.clone(), true).unwrap();
    env.registry.remove("Phone").unwrap();

    let results: Vec<_> = sensors.iter_mut().map(|s| s.refresh()).collect();
    let missing = results
        .iter()
        .filter(|r| matches!(r, Err(SensorError::DeviceMissing(name)) if name == "Phone"))
        .count();
    assert_eq!(missing, 2);
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 2);
}

#[test]
fn test_sensors_stay_independent_of_each_other() {
    let registry = Arc::new(InMemoryRegistry::from_devices(mock::household()).unwrap());
    let sensors = setup_platform(registry.clone(), true).unwrap();

    let unique_ids: BTreeSet<String> = sensors.iter().map(|s| s.unique_id()).collect();
    assert_eq!(unique_ids.len(), sensors.len());

    for sensor in &sensors {
        let device = registry.device(sensor.device_key()).unwrap();
        assert_eq!(
            sensor.icon(),
            resolve_icon(device.battery.level, device.battery.state, sensor.kind())
        );
    }
}

#[test]
fn test_attribute_keys_identical_for_both_kinds() {
    let registry = Arc::new(InMemoryRegistry::from_devices(mock::household()).unwrap());
    let sensors = setup_platform(registry, true).unwrap();

    for pair in sensors.chunks(2) {
        let level_keys: Vec<_> = pair[0].extra_attributes().into_keys().collect();
        let state_keys: Vec<_> = pair[1].extra_attributes().into_keys().collect();
        assert_eq!(level_keys, state_keys);
        assert_eq!(level_keys.len(), 5);
    }
}

#[test]
fn test_unknown_kind_is_configuration_error() {
    let err = "charge".parse::<SensorKind>().unwrap_err();
    assert!(err.to_string().contains("charge"));
}
