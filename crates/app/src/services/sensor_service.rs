//! Sensor service — the sensor map plus its aggregate counts.

use hydroview_domain::error::BackendError;
use hydroview_domain::sensor::{SensorMap, SensorStats};

use crate::ports::BackendGateway;

/// Data backing the sensors page.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorOverview {
    pub sensors: SensorMap,
    pub stats: SensorStats,
}

/// Application service for the sensors page.
pub struct SensorService<B> {
    gateway: B,
}

impl<B: BackendGateway> SensorService<B> {
    /// Create a new service backed by the given gateway.
    pub fn new(gateway: B) -> Self {
        Self { gateway }
    }

    /// Fetch the sensor map and derive its statistics.
    ///
    /// # Errors
    ///
    /// Returns any [`BackendError`]; the page renders it as a banner with
    /// zeroed statistics.
    pub async fn overview(&self) -> Result<SensorOverview, BackendError> {
        let sensors = self.gateway.sensors().await?;
        let stats = SensorStats::from_sensors(&sensors);
        Ok(SensorOverview { sensors, stats })
    }
}
