//! Sensor status — whether a sensor is currently reporting.

use serde::{Deserialize, Serialize};

/// Operational status of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Active,
    Inactive,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SensorStatus {
    /// Whether the sensor counts towards the active total.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Inactive => f.write_str("inactive"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
