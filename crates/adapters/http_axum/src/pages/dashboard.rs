//! Dashboard page — aggregate system overview.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use hydroview_app::ports::BackendGateway;
use hydroview_app::services::dashboard_service::DashboardData;
use hydroview_domain::sensor::SensorMap;
use hydroview_domain::status::StatusReport;

use super::filters;
use crate::state::AppState;

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    refresh_seconds: u32,
    error: Option<String>,
    status: StatusReport,
    sensors: SensorMap,
    users_count: usize,
}

impl IntoResponse for DashboardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /dashboard` — system overview; failures render as a banner.
pub async fn show<B>(State(state): State<AppState<B>>) -> DashboardTemplate
where
    B: BackendGateway + Send + Sync + 'static,
{
    match state.dashboard_service.overview().await {
        Ok(DashboardData {
            status,
            sensors,
            users_count,
        }) => DashboardTemplate {
            refresh_seconds: 10,
            error: None,
            status,
            sensors,
            users_count,
        },
        Err(err) => DashboardTemplate {
            refresh_seconds: 10,
            error: Some(err.user_message()),
            status: StatusReport::default(),
            sensors: SensorMap::new(),
            users_count: 0,
        },
    }
}
