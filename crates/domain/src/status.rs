//! The backend's self-reported system status.

use serde::{Deserialize, Serialize};

/// Payload of `GET /api/status`.
///
/// Only `success` and `error` are interpreted; every other field the
/// backend reports is carried through to the dashboard verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusReport {
    /// Whether the backend considers itself healthy.
    pub success: bool,
    /// Failure detail, set when `success` is false.
    pub error: Option<String>,
    /// Everything else the backend reports (uptime, versions, …).
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Default for StatusReport {
    fn default() -> Self {
        Self {
            success: true,
            error: None,
            details: serde_json::Map::new(),
        }
    }
}

impl StatusReport {
    /// Synthesize the failure record shown when the status endpoint itself
    /// could not be read.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            details: serde_json::Map::new(),
        }
    }
}
