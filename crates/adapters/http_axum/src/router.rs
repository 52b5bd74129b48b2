//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hydroview_app::ports::BackendGateway;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the JSON endpoints (`/health`, `/api/proxy/…`) with the SSR
/// pages at `/`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<B>(state: AppState<B>) -> Router
where
    B: BackendGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(crate::api::health::<B>))
        .route("/api/proxy/{*endpoint}", get(crate::api::proxy::<B>))
        .merge(crate::pages::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
