//! Configuration schema definitions.

use std::net::SocketAddr;

/// TripAdvisor Content API base URL.
pub const UPSTREAM_BASE_URL: &str = "https://api.content.tripadvisor.com/api/v1";

/// Port used when `TRIPADVISOR_PORT` is not set.
pub const DEFAULT_PORT: u16 = 8006;

/// Host the relay binds to.
pub const BIND_HOST: &str = "0.0.0.0";

/// Root configuration for the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    /// Key sent upstream in `X-TripAdvisor-API-Key`. `None` when unset or blank.
    pub api_key: Option<String>,

    /// Upstream base URL without trailing slash.
    pub upstream_base_url: String,

    /// Host part of the listen address.
    pub bind_host: String,

    /// Listen port.
    pub port: u16,

    /// Prometheus scrape endpoint. Metrics export is off when `None`.
    pub metrics_address: Option<SocketAddr>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            upstream_base_url: UPSTREAM_BASE_URL.to_string(),
            bind_host: BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            metrics_address: None,
        }
    }
}

impl RelayConfig {
    /// Listen address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Set the API key, treating blank values as absent.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }
}
