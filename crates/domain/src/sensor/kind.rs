//! Sensor kind — what a sensor measures.

use serde::{Deserialize, Serialize};

/// Measurement kind of a sensor.
///
/// Any wire value outside the three kinds the pages break out maps to
/// [`Other`](Self::Other) so a new backend sensor type never fails a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Ph,
    Humidity,
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Temperature => f.write_str("temperature"),
            Self::Ph => f.write_str("ph"),
            Self::Humidity => f.write_str("humidity"),
            Self::Other => f.write_str("other"),
        }
    }
}
