//! Sensor kinds

use crate::SensorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which battery reading a sensor exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Level,
    State,
}

impl SensorKind {
    /// Every kind, in setup order
    pub const ALL: [SensorKind; 2] = [SensorKind::Level, SensorKind::State];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Level => "level",
            SensorKind::State => "state",
        }
    }

    /// Suffix appended to the device name
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Level => "Battery Level",
            SensorKind::State => "Battery State",
        }
    }

    /// Unit of measurement
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            SensorKind::Level => Some("%"),
            SensorKind::State => None,
        }
    }
}

impl FromStr for SensorKind {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "level" => Ok(SensorKind::Level),
            "state" => Ok(SensorKind::State),
            other => Err(SensorError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
