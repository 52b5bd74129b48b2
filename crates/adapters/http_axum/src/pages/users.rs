//! Users page — the backend's user directory.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use hydroview_app::ports::BackendGateway;
use hydroview_domain::user::UserDirectory;

use super::filters;
use crate::state::AppState;

/// Users page template.
#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    refresh_seconds: u32,
    error: Option<String>,
    directory: UserDirectory,
}

impl IntoResponse for UsersTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /users` — user table; failures render as a banner with an empty
/// table.
pub async fn show<B>(State(state): State<AppState<B>>) -> UsersTemplate
where
    B: BackendGateway + Send + Sync + 'static,
{
    match state.user_service.directory().await {
        Ok(directory) => UsersTemplate {
            refresh_seconds: 10,
            error: None,
            directory,
        },
        Err(err) => UsersTemplate {
            refresh_seconds: 10,
            error: Some(err.user_message()),
            directory: UserDirectory::default(),
        },
    }
}
