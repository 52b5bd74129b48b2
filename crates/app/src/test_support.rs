//! Configurable in-memory gateway stub shared by the service tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hydroview_domain::error::BackendError;
use hydroview_domain::probe::RawReply;
use hydroview_domain::sensor::SensorMap;
use hydroview_domain::status::StatusReport;
use hydroview_domain::user::UserDirectory;

use crate::ports::BackendGateway;

/// Gateway stub with canned replies per endpoint.
pub(crate) struct StubGateway {
    pub status: Result<StatusReport, BackendError>,
    pub sensors: Result<SensorMap, BackendError>,
    pub users: Result<UserDirectory, BackendError>,
    pub health: Result<(), BackendError>,
    /// Replies for `raw`/`probe`, keyed by path; unknown paths answer 404.
    pub raw: BTreeMap<String, Result<RawReply, BackendError>>,
    /// Number of times `health` was called, observable after the stub has
    /// been moved into a service.
    pub health_calls: Arc<AtomicUsize>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            status: Ok(StatusReport::default()),
            sensors: Ok(SensorMap::new()),
            users: Ok(UserDirectory::default()),
            health: Ok(()),
            raw: BTreeMap::new(),
            health_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl StubGateway {
    fn lookup(&self, path: &str) -> Result<RawReply, BackendError> {
        self.raw.get(path).cloned().unwrap_or(Ok(RawReply {
            status: 404,
            body: serde_json::Value::Null,
        }))
    }
}

impl BackendGateway for StubGateway {
    fn system_status(&self) -> impl Future<Output = Result<StatusReport, BackendError>> + Send {
        let reply = self.status.clone();
        async move { reply }
    }

    fn sensors(&self) -> impl Future<Output = Result<SensorMap, BackendError>> + Send {
        let reply = self.sensors.clone();
        async move { reply }
    }

    fn users(&self) -> impl Future<Output = Result<UserDirectory, BackendError>> + Send {
        let reply = self.users.clone();
        async move { reply }
    }

    fn health(&self) -> impl Future<Output = Result<(), BackendError>> + Send {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.health.clone();
        async move { reply }
    }

    fn raw(&self, path: &str) -> impl Future<Output = Result<RawReply, BackendError>> + Send {
        let reply = self.lookup(path);
        async move { reply }
    }

    fn probe(&self, path: &str) -> impl Future<Output = Result<RawReply, BackendError>> + Send {
        let reply = self.lookup(path);
        async move { reply }
    }
}
