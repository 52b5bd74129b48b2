//! Aggregate sensor counts shown on the sensors page.

use serde::Serialize;

use super::{Sensor, SensorKind, SensorMap};

/// Per-status and per-kind sensor counts.
///
/// Each count is the cardinality of the records matching its predicate;
/// `total` is the size of the whole map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SensorStats {
    pub total: usize,
    pub active: usize,
    pub temperature: usize,
    pub ph: usize,
    pub humidity: usize,
}

impl SensorStats {
    /// Count sensors by status and kind.
    #[must_use]
    pub fn from_sensors(sensors: &SensorMap) -> Self {
        let count = |pred: fn(&Sensor) -> bool| sensors.values().filter(|s| pred(s)).count();
        Self {
            total: sensors.len(),
            active: count(|s| s.status.is_active()),
            temperature: count(|s| s.kind == SensorKind::Temperature),
            ph: count(|s| s.kind == SensorKind::Ph),
            humidity: count(|s| s.kind == SensorKind::Humidity),
        }
    }
}
