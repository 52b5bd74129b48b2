//! Raw backend replies and per-endpoint probe results.

use serde::Serialize;

use crate::error::BackendError;

/// Raw reply from an un-reshaped backend GET: the status code to forward
/// plus the decoded JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawReply {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Outcome of probing one backend endpoint for the diagnostics page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    /// Short endpoint name (`health`, `status`, …).
    pub name: &'static str,
    /// Path that was probed, relative to the backend base URL.
    pub path: String,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    /// Build a display row from a raw probe reply.
    #[must_use]
    pub fn from_reply(
        name: &'static str,
        path: String,
        reply: Result<RawReply, BackendError>,
    ) -> Self {
        let outcome = match reply {
            Ok(RawReply { status: 200, body }) => ProbeOutcome::Ok { body },
            Ok(RawReply { status, .. }) => ProbeOutcome::Status { code: status },
            Err(err) => ProbeOutcome::Error {
                message: err.to_string(),
            },
        };
        Self {
            name,
            path,
            outcome,
        }
    }
}

/// What one probed endpoint answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProbeOutcome {
    /// 200 with a decoded body.
    Ok { body: serde_json::Value },
    /// Answered, but not with 200.
    Status { code: u16 },
    /// Transport failure, no HTTP answer.
    Error { message: String },
}

impl ProbeOutcome {
    /// Whether the endpoint answered 200.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Status column label: the code when the backend answered, `error`
    /// otherwise.
    #[must_use]
    pub fn status_label(&self) -> String {
        match self {
            Self::Ok { .. } => "200".to_string(),
            Self::Status { code } => code.to_string(),
            Self::Error { .. } => "error".to_string(),
        }
    }

    /// Detail column: the decoded body for successes, the failure otherwise.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Ok { body } => body.to_string(),
            Self::Status { code } => format!("HTTP {code}"),
            Self::Error { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_build_ok_row_from_200_reply() {
        let result = ProbeResult::from_reply(
            "health",
            "api/health".to_string(),
            Ok(RawReply {
                status: 200,
                body: json!({"status": "ok"}),
            }),
        );
        assert!(result.outcome.is_ok());
        assert_eq!(result.outcome.status_label(), "200");
        assert!(result.outcome.detail().contains("ok"));
    }

    #[test]
    fn should_build_status_row_from_non_200_reply() {
        let result = ProbeResult::from_reply(
            "status",
            "api/status".to_string(),
            Ok(RawReply {
                status: 503,
                body: json!({}),
            }),
        );
        assert!(!result.outcome.is_ok());
        assert_eq!(result.outcome.status_label(), "503");
        assert_eq!(result.outcome.detail(), "HTTP 503");
    }

    #[test]
    fn should_build_error_row_from_transport_failure() {
        let result = ProbeResult::from_reply(
            "users",
            "api/users".to_string(),
            Err(BackendError::Connection {
                url: "http://localhost:5000/api/users".to_string(),
            }),
        );
        assert!(!result.outcome.is_ok());
        assert_eq!(result.outcome.status_label(), "error");
        assert!(result.outcome.detail().contains("cannot connect"));
    }
}
