//! Static pages — no backend calls.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

/// Home page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate;

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — landing page.
pub async fn home() -> HomeTemplate {
    HomeTemplate
}

/// Analytics page template.
#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate;

impl IntoResponse for AnalyticsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /analytics`.
pub async fn analytics() -> AnalyticsTemplate {
    AnalyticsTemplate
}

/// Reports page template.
#[derive(Template)]
#[template(path = "reports.html")]
pub struct ReportsTemplate;

impl IntoResponse for ReportsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /reports`.
pub async fn reports() -> ReportsTemplate {
    ReportsTemplate
}

/// Settings page template.
#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate;

impl IntoResponse for SettingsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /settings`.
pub async fn settings() -> SettingsTemplate {
    SettingsTemplate
}
