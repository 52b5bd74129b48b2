//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hydroview.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Backend API settings.
    pub backend: BackendConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Backend API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend REST API.
    pub url: String,
    /// Deadline in seconds for the data endpoints.
    pub request_timeout_secs: u64,
    /// Deadline in seconds for the reachability check.
    pub health_timeout_secs: u64,
    /// Deadline in seconds for diagnostics probes.
    pub probe_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `hydroview.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("hydroview.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup. Later entries win over
    /// earlier ones, so `HYDROVIEW_BACKEND_URL` beats `BACKEND_URL` and
    /// `RUST_LOG` beats `HYDROVIEW_LOG`.
    fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(val) = get("HYDROVIEW_HOST") {
            self.server.host = val;
        }
        if let Some(val) = get("HYDROVIEW_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = get("HYDROVIEW_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = get("BACKEND_URL") {
            self.backend.url = val;
        }
        if let Some(val) = get("HYDROVIEW_BACKEND_URL") {
            self.backend.url = val;
        }
        if let Some(val) = get("HYDROVIEW_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = get("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.backend.url.starts_with("http://") && !self.backend.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "backend url must be http(s), got '{}'",
                self.backend.url
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Translate the backend section into the gateway adapter's config.
    #[must_use]
    pub fn gateway_config(&self) -> hydroview_adapter_backend_reqwest::Config {
        hydroview_adapter_backend_reqwest::Config {
            base_url: self.backend.url.clone(),
            request_timeout: Duration::from_secs(self.backend.request_timeout_secs),
            health_timeout: Duration::from_secs(self.backend.health_timeout_secs),
            probe_timeout: Duration::from_secs(self.backend.probe_timeout_secs),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5000".to_string(),
            request_timeout_secs: 5,
            health_timeout_secs: 2,
            probe_timeout_secs: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hydroviewd=info,hydroview=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.backend.url, "http://localhost:5000");
        assert_eq!(config.backend.request_timeout_secs, 5);
        assert_eq!(config.backend.health_timeout_secs, 2);
        assert_eq!(config.backend.probe_timeout_secs, 3);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.backend.url, "http://localhost:5000");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [backend]
            url = 'http://backend.internal:5000'
            request_timeout_secs = 10
            health_timeout_secs = 1
            probe_timeout_secs = 4

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.backend.url, "http://backend.internal:5000");
        assert_eq!(config.backend.request_timeout_secs, 10);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [backend]
            url = 'http://10.0.0.2:5000'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.url, "http://10.0.0.2:5000");
        assert_eq!(config.backend.request_timeout_secs, 5);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_non_http_backend_url() {
        let mut config = Config::default();
        config.backend.url = "ftp://backend:21".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_configuration() {
        assert!(Config::default().validate().is_ok());
    }

    fn vars<const N: usize>(entries: [(&'static str, &'static str); N]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            entries
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, val)| (*val).to_string())
        }
    }

    #[test]
    fn should_override_host_and_port_from_variables() {
        let mut config = Config::default();
        config.apply_overrides(vars([("HYDROVIEW_HOST", "10.0.0.9"), ("HYDROVIEW_PORT", "8088")]));
        assert_eq!(config.server.host, "10.0.0.9");
        assert_eq!(config.server.port, 8088);
    }

    #[test]
    fn should_split_bind_override_into_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(vars([("HYDROVIEW_BIND", "127.0.0.1:9000")]));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn should_ignore_unparseable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(vars([("HYDROVIEW_PORT", "not-a-port")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_prefer_prefixed_backend_url_over_plain() {
        let mut config = Config::default();
        config.apply_overrides(vars([
            ("BACKEND_URL", "http://plain:5000"),
            ("HYDROVIEW_BACKEND_URL", "http://prefixed:5000"),
        ]));
        assert_eq!(config.backend.url, "http://prefixed:5000");
    }

    #[test]
    fn should_fall_back_to_plain_backend_url() {
        let mut config = Config::default();
        config.apply_overrides(vars([("BACKEND_URL", "http://plain:5000")]));
        assert_eq!(config.backend.url, "http://plain:5000");
    }

    #[test]
    fn should_prefer_rust_log_over_hydroview_log() {
        let mut config = Config::default();
        config.apply_overrides(vars([
            ("HYDROVIEW_LOG", "hydroviewd=debug"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_leave_defaults_when_no_variables_set() {
        let mut config = Config::default();
        config.apply_overrides(|_| None);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.backend.url, "http://localhost:5000");
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_map_backend_section_onto_gateway_config() {
        let mut config = Config::default();
        config.backend.url = "http://backend:5000".to_string();
        config.backend.request_timeout_secs = 7;

        let gateway = config.gateway_config();
        assert_eq!(gateway.base_url, "http://backend:5000");
        assert_eq!(gateway.request_timeout, Duration::from_secs(7));
        assert_eq!(gateway.health_timeout, Duration::from_secs(2));
    }
}
