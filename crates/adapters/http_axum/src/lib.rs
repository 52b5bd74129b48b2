//! # hydroview-adapter-http-axum
//!
//! HTTP adapter using axum — serves the server-rendered dashboard pages
//! and the JSON endpoints (frontend health, backend proxy).

pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;
