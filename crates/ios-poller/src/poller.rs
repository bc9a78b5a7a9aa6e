//! Polling loop driving the battery sensors

use crate::source::RegistrySource;
use anyhow::Result;
use ios_sensor::{DeviceBatterySensor, EntityState, setup_platform};
use std::io::Write;
use std::time::Duration;

/// Refreshes every sensor once per tick
pub struct Poller {
    source: RegistrySource,
    sensors: Vec<DeviceBatterySensor>,
}

impl Poller {
    pub fn new(source: RegistrySource, discovered: bool) -> Result<Self> {
        let sensors = setup_platform(source.handle(), discovered)?;
        Ok(Self { source, sensors })
    }

    pub fn sensors(&self) -> &[DeviceBatterySensor] {
        &self.sensors
    }

    /// Sync the registry, refresh each sensor in turn and collect their state
    ///
    /// A sensor that fails to refresh still reports, flagged unavailable.
    pub fn tick(&mut self) -> Result<Vec<EntityState>> {
        self.source.sync()?;

        let mut states = Vec::with_capacity(self.sensors.len());
        for sensor in &mut self.sensors {
            if let Err(e) = sensor.refresh() {
                tracing::warn!("Refresh of {} failed: {}", sensor.unique_id(), e);
            }
            states.push(sensor.snapshot());
        }

        Ok(states)
    }

    /// Write one JSON line per entity
    pub fn publish(states: &[EntityState], out: &mut impl Write) -> Result<()> {
        for state in states {
            serde_json::to_writer(&mut *out, state)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Poll until Ctrl-C
    pub async fn run(&mut self, interval: Duration) -> Result<()> {
        let mut ticker = tokio::time::interval(interval);
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Keep polling; the next tick may read a fixed registry
                    if let Err(e) = self.poll_once() {
                        tracing::error!("Poll failed: {:#}", e);
                    }
                }
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping poller");
                    return Ok(());
                }
            }
        }
    }

    /// Run a single tick and publish to stdout
    pub fn poll_once(&mut self) -> Result<()> {
        let states = self.tick()?;

        tracing::debug!("Publishing {} entity state(s)", states.len());
        let stdout = std::io::stdout();
        Self::publish(&states, &mut stdout.lock())
    }
}
