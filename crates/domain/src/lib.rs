//! # hydroview-domain
//!
//! Pure domain model for the hydroview frontend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, timestamp helpers, the backend
//!   error taxonomy
//! - Define **Sensors** (readings reported by the backend, keyed by id) and
//!   their aggregate statistics
//! - Define **Users** (accounts known to the backend) and the reshaped
//!   directory payload
//! - Define **`StatusReport`** (the backend's self-reported system status)
//! - Define **`ProbeResult`** (per-endpoint outcomes for the diagnostics page)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The outbound HTTP boundary is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod id;
pub mod time;

pub mod probe;
pub mod sensor;
pub mod status;
pub mod user;
