//! Backend gateway port — typed GETs against the backend REST API.

use hydroview_domain::error::BackendError;
use hydroview_domain::probe::RawReply;
use hydroview_domain::sensor::SensorMap;
use hydroview_domain::status::StatusReport;
use hydroview_domain::user::UserDirectory;

/// Outbound port for the backend REST API.
///
/// Every method is a single HTTP GET. The three typed endpoints use the
/// regular request deadline; [`health`](Self::health) uses the short
/// reachability deadline and [`probe`](Self::probe) the diagnostics one.
/// [`raw`](Self::raw) applies no deadline at all — the proxy forwards
/// whatever the backend does, however long it takes.
pub trait BackendGateway {
    /// `GET /api/status`.
    fn system_status(&self) -> impl Future<Output = Result<StatusReport, BackendError>> + Send;

    /// `GET /api/sensors`, unwrapped from its envelope.
    fn sensors(&self) -> impl Future<Output = Result<SensorMap, BackendError>> + Send;

    /// `GET /api/users`, reshaped into a directory.
    fn users(&self) -> impl Future<Output = Result<UserDirectory, BackendError>> + Send;

    /// `GET /api/health` — `Ok` iff the backend answered 200.
    fn health(&self) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// `GET {base}/{path}` with no deadline, status code preserved.
    fn raw(&self, path: &str) -> impl Future<Output = Result<RawReply, BackendError>> + Send;

    /// `GET {base}/{path}` under the probe deadline, status code preserved.
    fn probe(&self, path: &str) -> impl Future<Output = Result<RawReply, BackendError>> + Send;
}
