//! # hydroviewd — hydroview daemon
//!
//! Composition root that wires the backend gateway to the HTTP adapter
//! and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialise tracing
//! - Build the reqwest backend gateway
//! - Construct application services via `AppState`
//! - Build the axum router, bind a TCP port and serve until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no page or domain logic belongs here.

mod config;

use hydroview_adapter_http_axum::state::AppState;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.as_str())
        .init();

    // Gateway + services
    let gateway = config.gateway_config().build()?;
    let backend_url = gateway.base_url().to_string();
    let state = AppState::new(backend_url.clone(), gateway);

    // HTTP
    let app = hydroview_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, %backend_url, "hydroviewd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
    }
}
