//! Gateway configuration.

use std::time::Duration;

use crate::gateway::HttpBackendGateway;

/// Connection settings for the backend REST API.
///
/// The deadlines differ by call class: data pages wait the longest, the
/// reachability check the shortest, diagnostics probes sit in between.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Deadline for the data endpoints (status, sensors, users).
    pub request_timeout: Duration,
    /// Deadline for the reachability check.
    pub health_timeout: Duration,
    /// Deadline for diagnostics probes.
    pub probe_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout: Duration::from_secs(5),
            health_timeout: Duration::from_secs(2),
            probe_timeout: Duration::from_secs(3),
        }
    }
}

impl Config {
    /// Build the gateway.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the underlying HTTP client cannot be
    /// initialised.
    pub fn build(self) -> Result<HttpBackendGateway, BuildError> {
        let client = reqwest::Client::builder().build().map_err(BuildError)?;
        Ok(HttpBackendGateway::new(client, self))
    }
}

/// Failure constructing the underlying HTTP client.
#[derive(Debug, thiserror::Error)]
#[error("failed to build the HTTP client")]
pub struct BuildError(#[source] reqwest::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.health_timeout, Duration::from_secs(2));
        assert_eq!(config.probe_timeout, Duration::from_secs(3));
    }

    #[test]
    fn should_build_gateway_from_defaults() {
        let gateway = Config::default().build().unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:5000");
    }
}
