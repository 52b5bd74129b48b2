//! Sensors page — sensor table plus aggregate counts.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use hydroview_app::ports::BackendGateway;
use hydroview_app::services::sensor_service::SensorOverview;
use hydroview_domain::sensor::{SensorMap, SensorStats};

use super::filters;
use crate::state::AppState;

/// Sensors page template.
#[derive(Template)]
#[template(path = "sensors.html")]
pub struct SensorsTemplate {
    refresh_seconds: u32,
    error: Option<String>,
    sensors: SensorMap,
    stats: SensorStats,
}

impl IntoResponse for SensorsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /sensors` — sensor table; failures render as a banner with zeroed
/// statistics.
pub async fn show<B>(State(state): State<AppState<B>>) -> SensorsTemplate
where
    B: BackendGateway + Send + Sync + 'static,
{
    match state.sensor_service.overview().await {
        Ok(SensorOverview { sensors, stats }) => SensorsTemplate {
            refresh_seconds: 5,
            error: None,
            sensors,
            stats,
        },
        Err(err) => SensorsTemplate {
            refresh_seconds: 5,
            error: Some(err.user_message()),
            sensors: SensorMap::new(),
            stats: SensorStats::default(),
        },
    }
}
