//! Shared application state for axum handlers.

use std::sync::Arc;

use hydroview_app::ports::BackendGateway;
use hydroview_app::services::dashboard_service::DashboardService;
use hydroview_app::services::diagnostics_service::DiagnosticsService;
use hydroview_app::services::sensor_service::SensorService;
use hydroview_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the gateway type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the services themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<B> {
    /// Backend base URL, shown on the health endpoint and the
    /// diagnostics page.
    pub backend_url: Arc<str>,
    /// Dashboard aggregation service.
    pub dashboard_service: Arc<DashboardService<B>>,
    /// Sensor map + statistics service.
    pub sensor_service: Arc<SensorService<B>>,
    /// User directory service.
    pub user_service: Arc<UserService<B>>,
    /// Probes, health boolean and proxy relay.
    pub diagnostics_service: Arc<DiagnosticsService<B>>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            backend_url: Arc::clone(&self.backend_url),
            dashboard_service: Arc::clone(&self.dashboard_service),
            sensor_service: Arc::clone(&self.sensor_service),
            user_service: Arc::clone(&self.user_service),
            diagnostics_service: Arc::clone(&self.diagnostics_service),
        }
    }
}

impl<B> AppState<B>
where
    B: BackendGateway + Clone + Send + Sync + 'static,
{
    /// Create the application state, wiring one service per page family
    /// around clones of the gateway.
    pub fn new(backend_url: impl Into<Arc<str>>, gateway: B) -> Self {
        Self {
            backend_url: backend_url.into(),
            dashboard_service: Arc::new(DashboardService::new(gateway.clone())),
            sensor_service: Arc::new(SensorService::new(gateway.clone())),
            user_service: Arc::new(UserService::new(gateway.clone())),
            diagnostics_service: Arc::new(DiagnosticsService::new(gateway)),
        }
    }
}
