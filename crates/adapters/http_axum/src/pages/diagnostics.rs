//! Diagnostics page — probes every backend endpoint and shows the results.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use hydroview_app::ports::BackendGateway;
use hydroview_domain::probe::ProbeResult;

use crate::state::AppState;

/// Diagnostics page template.
#[derive(Template)]
#[template(path = "diagnostics.html")]
pub struct DiagnosticsTemplate {
    backend_url: String,
    results: Vec<ProbeResult>,
}

impl IntoResponse for DiagnosticsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /diagnostics` — probe the backend endpoints one by one.
pub async fn show<B>(State(state): State<AppState<B>>) -> DiagnosticsTemplate
where
    B: BackendGateway + Send + Sync + 'static,
{
    let results = state.diagnostics_service.probe_all().await;
    DiagnosticsTemplate {
        backend_url: state.backend_url.to_string(),
        results,
    }
}
