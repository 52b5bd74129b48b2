//! `BackendGateway` implementation backed by reqwest.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use hydroview_app::ports::BackendGateway;
use hydroview_domain::error::BackendError;
use hydroview_domain::probe::RawReply;
use hydroview_domain::sensor::{SensorMap, SensorsEnvelope};
use hydroview_domain::status::StatusReport;
use hydroview_domain::user::UserDirectory;

use crate::config::Config;

/// Outbound HTTP gateway to the backend REST API.
///
/// Cheap to clone: the underlying [`Client`] is reference counted.
#[derive(Debug, Clone)]
pub struct HttpBackendGateway {
    client: Client,
    base_url: String,
    config: Config,
}

impl HttpBackendGateway {
    pub(crate) fn new(client: Client, config: Config) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    /// Base URL the gateway talks to, trailing slashes stripped.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a typed JSON body; anything but 200 is an error.
    async fn get_json<T>(&self, path: &str, timeout: Duration) -> Result<T, BackendError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET backend");

        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| map_transport_error(&url, &err))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BackendError::Status {
                url,
                code: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| map_transport_error(&url, &err))
    }

    /// GET a raw reply, preserving the status code.
    async fn get_raw(
        &self,
        path: &str,
        timeout: Option<Duration>,
    ) -> Result<RawReply, BackendError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET backend (raw)");

        let mut request = self.client.get(&url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|err| map_transport_error(&url, &err))?;

        let status = response.status().as_u16();
        let body = response
            .json()
            .await
            .map_err(|err| map_transport_error(&url, &err))?;

        Ok(RawReply { status, body })
    }
}

/// Map a reqwest failure onto the domain taxonomy.
fn map_transport_error(url: &str, err: &reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_connect() {
        BackendError::Connection {
            url: url.to_string(),
        }
    } else if err.is_decode() {
        BackendError::Decode {
            url: url.to_string(),
            detail: err.to_string(),
        }
    } else {
        // Request construction, redirect loops and body failures all read
        // as an unreachable backend to the pages.
        BackendError::Connection {
            url: url.to_string(),
        }
    }
}

impl BackendGateway for HttpBackendGateway {
    async fn system_status(&self) -> Result<StatusReport, BackendError> {
        self.get_json("api/status", self.config.request_timeout).await
    }

    async fn sensors(&self) -> Result<SensorMap, BackendError> {
        let envelope: SensorsEnvelope = self
            .get_json("api/sensors", self.config.request_timeout)
            .await?;
        Ok(envelope.sensors)
    }

    async fn users(&self) -> Result<UserDirectory, BackendError> {
        let value: serde_json::Value = self
            .get_json("api/users", self.config.request_timeout)
            .await?;
        Ok(UserDirectory::from_value(value))
    }

    async fn health(&self) -> Result<(), BackendError> {
        let url = self.endpoint("api/health");
        let response = self
            .client
            .get(&url)
            .timeout(self.config.health_timeout)
            .send()
            .await
            .map_err(|err| map_transport_error(&url, &err))?;

        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(BackendError::Status {
                url,
                code: status.as_u16(),
            })
        }
    }

    async fn raw(&self, path: &str) -> Result<RawReply, BackendError> {
        self.get_raw(path, None).await
    }

    async fn probe(&self, path: &str) -> Result<RawReply, BackendError> {
        self.get_raw(path, Some(self.config.probe_timeout)).await
    }
}
