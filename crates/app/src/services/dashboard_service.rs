//! Dashboard service — aggregate overview of the whole system.

use hydroview_domain::error::BackendError;
use hydroview_domain::sensor::SensorMap;
use hydroview_domain::status::StatusReport;

use crate::ports::BackendGateway;

/// Data backing the dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub status: StatusReport,
    pub sensors: SensorMap,
    pub users_count: usize,
}

/// Application service for the dashboard overview.
pub struct DashboardService<B> {
    gateway: B,
}

impl<B: BackendGateway> DashboardService<B> {
    /// Create a new service backed by the given gateway.
    pub fn new(gateway: B) -> Self {
        Self { gateway }
    }

    /// Fetch status, sensors and user count for the dashboard.
    ///
    /// A non-200 or unreadable body on a single endpoint degrades that
    /// section (synthesized failure report, empty sensors, zero users)
    /// while the rest still renders.
    ///
    /// # Errors
    ///
    /// Returns the first [`BackendError`] that marks the backend
    /// unreachable, or the health probe's error when every section came
    /// back empty.
    pub async fn overview(&self) -> Result<DashboardData, BackendError> {
        let status = match self.gateway.system_status().await {
            Ok(status) => status,
            Err(err) if err.is_unreachable() => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "status section degraded");
                StatusReport::failure(err.user_message())
            }
        };

        let sensors = match self.gateway.sensors().await {
            Ok(sensors) => sensors,
            Err(err) if err.is_unreachable() => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "sensors section degraded");
                SensorMap::new()
            }
        };

        let users_count = match self.gateway.users().await {
            Ok(directory) => directory.count,
            Err(err) if err.is_unreachable() => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "users section degraded");
                0
            }
        };

        // Nothing came back at all: confirm the backend is actually up
        // before presenting an empty dashboard as the truth.
        if sensors.is_empty() && users_count == 0 {
            self.gateway.health().await?;
        }

        Ok(DashboardData {
            status,
            sensors,
            users_count,
        })
    }
}
