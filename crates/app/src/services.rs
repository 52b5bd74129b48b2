//! Application services — one use-case struct per page family.

pub mod dashboard_service;
pub mod diagnostics_service;
pub mod sensor_service;
pub mod user_service;
