//! # hydroview-adapter-backend-reqwest
//!
//! Outbound HTTP adapter: implements the `BackendGateway` port with
//! [`reqwest`]. Owns base-URL joining, the per-class request deadlines and
//! the mapping from transport failures onto the domain error taxonomy.

mod config;
mod gateway;

pub use config::{BuildError, Config};
pub use gateway::HttpBackendGateway;
