//! Diagnostics service — per-endpoint probes, the health boolean, and the
//! proxy relay.

use hydroview_domain::error::BackendError;
use hydroview_domain::probe::{ProbeResult, RawReply};

use crate::ports::BackendGateway;

/// Endpoints probed by the diagnostics page, in display order.
const PROBED_ENDPOINTS: [&str; 4] = ["health", "status", "sensors", "users"];

/// Application service for the diagnostics page, the frontend health
/// endpoint, and the generic proxy.
pub struct DiagnosticsService<B> {
    gateway: B,
}

impl<B: BackendGateway> DiagnosticsService<B> {
    /// Create a new service backed by the given gateway.
    pub fn new(gateway: B) -> Self {
        Self { gateway }
    }

    /// Probe every known backend endpoint.
    ///
    /// Never fails: transport errors become [`ProbeResult`] rows with an
    /// error outcome.
    pub async fn probe_all(&self) -> Vec<ProbeResult> {
        let mut results = Vec::with_capacity(PROBED_ENDPOINTS.len());
        for name in PROBED_ENDPOINTS {
            let path = format!("api/{name}");
            let reply = self.gateway.probe(&path).await;
            results.push(ProbeResult::from_reply(name, path, reply));
        }
        results
    }

    /// Whether the backend currently answers its health endpoint.
    pub async fn backend_connected(&self) -> bool {
        self.gateway.health().await.is_ok()
    }

    /// Forward a GET to the backend, preserving its status code.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when no HTTP answer was obtained at all.
    pub async fn relay(&self, path: &str) -> Result<RawReply, BackendError> {
        self.gateway.raw(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubGateway;
    use serde_json::json;

    #[tokio::test]
    async fn should_probe_all_four_endpoints_in_order() {
        let mut stub = StubGateway::default();
        stub.raw.insert(
            "api/health".to_string(),
            Ok(RawReply {
                status: 200,
                body: json!({"status": "ok"}),
            }),
        );
        stub.raw.insert(
            "api/status".to_string(),
            Ok(RawReply {
                status: 503,
                body: json!({}),
            }),
        );
        stub.raw.insert(
            "api/sensors".to_string(),
            Err(BackendError::Timeout {
                url: "http://backend/api/sensors".to_string(),
            }),
        );
        stub.raw.insert(
            "api/users".to_string(),
            Ok(RawReply {
                status: 200,
                body: json!({"count": 0}),
            }),
        );

        let results = DiagnosticsService::new(stub).probe_all().await;
        let names: Vec<_> = results.iter().map(|r| r.name).collect();
        assert_eq!(names, ["health", "status", "sensors", "users"]);
        assert!(results[0].outcome.is_ok());
        assert_eq!(results[1].outcome.status_label(), "503");
        assert_eq!(results[2].outcome.status_label(), "error");
        assert!(results[3].outcome.is_ok());
    }

    #[tokio::test]
    async fn should_report_backend_connected_from_health_probe() {
        assert!(
            DiagnosticsService::new(StubGateway::default())
                .backend_connected()
                .await
        );

        let down = StubGateway {
            health: Err(BackendError::Connection {
                url: "http://backend/api/health".to_string(),
            }),
            ..StubGateway::default()
        };
        assert!(!DiagnosticsService::new(down).backend_connected().await);
    }

    #[tokio::test]
    async fn should_relay_raw_reply_with_status_preserved() {
        let mut stub = StubGateway::default();
        stub.raw.insert(
            "api/feeds/latest".to_string(),
            Ok(RawReply {
                status: 201,
                body: json!({"id": 7}),
            }),
        );

        let reply = DiagnosticsService::new(stub)
            .relay("api/feeds/latest")
            .await
            .unwrap();
        assert_eq!(reply.status, 201);
        assert_eq!(reply.body["id"], 7);
    }
}
