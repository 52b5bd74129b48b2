//! JSON endpoints — frontend health and the backend proxy.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use hydroview_app::ports::BackendGateway;

use crate::error::ProxyError;
use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub backend_connected: bool,
    pub backend_url: String,
}

/// `GET /health` — frontend liveness plus backend reachability.
///
/// Always answers 200: an unreachable backend only flips the
/// `backend_connected` flag.
pub async fn health<B>(State(state): State<AppState<B>>) -> Json<HealthResponse>
where
    B: BackendGateway + Send + Sync + 'static,
{
    let backend_connected = state.diagnostics_service.backend_connected().await;
    Json(HealthResponse {
        status: "healthy",
        service: "frontend",
        backend_connected,
        backend_url: state.backend_url.to_string(),
    })
}

/// `GET /api/proxy/{*endpoint}` — forward a GET to the backend.
///
/// The backend's status code and JSON body come back verbatim; a transport
/// failure maps to 502 with a JSON error body.
pub async fn proxy<B>(
    State(state): State<AppState<B>>,
    Path(endpoint): Path<String>,
) -> Result<(StatusCode, Json<serde_json::Value>), ProxyError>
where
    B: BackendGateway + Send + Sync + 'static,
{
    let reply = state.diagnostics_service.relay(&endpoint).await?;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(reply.body)))
}
