//! Sensor — a single reading source reported by the backend.

mod kind;
mod stats;
mod status;

pub use kind::SensorKind;
pub use stats::SensorStats;
pub use status::SensorStatus;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::SensorId;

/// Sensors keyed by id, in the order the pages display them.
pub type SensorMap = BTreeMap<SensorId, Sensor>;

/// One sensor record from `GET /api/sensors`.
///
/// The backend's shape is loose: every field may be absent and unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensor {
    /// Display name, when the backend provides one.
    pub name: Option<String>,
    /// What the sensor measures.
    #[serde(rename = "type")]
    pub kind: SensorKind,
    /// Whether the sensor is currently reporting.
    pub status: SensorStatus,
    /// Latest reading.
    pub value: Option<f64>,
    /// Unit of the reading (`°C`, `pH`, `%`, …).
    pub unit: Option<String>,
    /// Unix seconds of the last reading.
    pub last_updated: Option<i64>,
}

impl Sensor {
    /// Name shown in tables, with a placeholder when the backend sent none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }

    /// Reading with its unit, or a dash when there is no value yet.
    #[must_use]
    pub fn display_value(&self) -> String {
        match (self.value, self.unit.as_deref()) {
            (Some(value), Some(unit)) => format!("{value} {unit}"),
            (Some(value), None) => value.to_string(),
            (None, _) => "-".to_string(),
        }
    }
}

/// Wire envelope around the sensor map: `{"sensors": {...}}`.
///
/// A missing key yields an empty map, matching how the pages treat a
/// well-formed but empty response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SensorsEnvelope {
    /// The enclosed sensor map.
    pub sensors: SensorMap,
}
