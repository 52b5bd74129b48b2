//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The only outbound dependency this frontend has is the backend
//! REST API, reached through [`BackendGateway`].

pub mod backend;

pub use backend::BackendGateway;
