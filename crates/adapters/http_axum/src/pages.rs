//! Server-side rendered HTML pages (no JavaScript).
//!
//! Data pages include `<meta http-equiv="refresh" content="N">` for
//! auto-reload and render backend failures as an inline banner while still
//! answering HTTP 200.

pub mod dashboard;
pub mod diagnostics;
pub mod sensors;
pub mod statics;
pub mod users;

pub(crate) mod filters;

use axum::Router;
use axum::routing::get;

use hydroview_app::ports::BackendGateway;

use crate::state::AppState;

/// Build the sub-router for the SSR pages.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: BackendGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(statics::home))
        .route("/dashboard", get(dashboard::show::<B>))
        .route("/sensors", get(sensors::show::<B>))
        .route("/users", get(users::show::<B>))
        .route("/analytics", get(statics::analytics))
        .route("/reports", get(statics::reports))
        .route("/settings", get(statics::settings))
        .route("/diagnostics", get(diagnostics::show::<B>))
}
