//! # hydroview-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the outbound adapter must implement:
//!   - `BackendGateway` — typed GETs against the backend REST API
//! - Define **use-case services** driving the pages:
//!   - `DashboardService` — status + sensors + user count with degraded rendering
//!   - `SensorService` — sensor map plus aggregate counts
//!   - `UserService` — reachability check, then the user directory
//!   - `DiagnosticsService` — per-endpoint probes, health boolean, proxy relay
//!
//! ## Dependency rule
//! Depends on `hydroview-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;
