//! Backend error taxonomy shared across the workspace.

use thiserror::Error;

/// Failure talking to the backend API.
///
/// Pages render these as an inline banner and still answer HTTP 200; only
/// the JSON proxy surfaces a failure status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// TCP/DNS level failure before any HTTP exchange happened.
    #[error("cannot connect to backend at {url}")]
    Connection {
        /// URL that was being requested.
        url: String,
    },
    /// The backend did not answer within the deadline.
    #[error("timed out waiting for backend at {url}")]
    Timeout {
        /// URL that was being requested.
        url: String,
    },
    /// The backend answered with a non-success status where 200 was required.
    #[error("backend returned status {code} for {url}")]
    Status {
        /// URL that was being requested.
        url: String,
        /// HTTP status code the backend answered with.
        code: u16,
    },
    /// The body could not be decoded as the expected JSON.
    #[error("unreadable response from {url}: {detail}")]
    Decode {
        /// URL that was being requested.
        url: String,
        /// Decoder detail, only logged and shown on diagnostics rows.
        detail: String,
    },
}

impl BackendError {
    /// Human-readable message rendered on the page banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection { url } => {
                format!("Cannot connect to the backend at {url}. Make sure the backend is running.")
            }
            Self::Timeout { .. } => {
                "Timed out contacting the backend. It may be slow or unresponsive.".to_string()
            }
            Self::Status { code, .. } => {
                format!("The backend answered with status {code}.")
            }
            Self::Decode { .. } => {
                "The backend sent a response that could not be read.".to_string()
            }
        }
    }

    /// Whether the failure means the backend is unreachable rather than a
    /// single endpoint misbehaving.
    ///
    /// Unreachable failures abort a whole page; the rest degrade only the
    /// section that produced them.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }
}
