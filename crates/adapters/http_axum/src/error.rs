//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hydroview_domain::error::BackendError;

/// JSON error body returned by the proxy endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BackendError`] to a JSON error response.
///
/// Only the proxy uses this: pages swallow failures into an inline banner
/// and still answer 200.
pub struct ProxyError(BackendError);

impl From<BackendError> for ProxyError {
    fn from(err: BackendError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "proxy request failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
