//! Client configuration.

use std::time::Duration;

use reqwest::header::HeaderMap;

/// Immutable configuration for [`AuthClient`](crate::AuthClient).
///
/// Fixed at construction; no operation mutates it. The default header set is
/// where service-level credentials (API key, service-role authorization) live
/// for privileged operations.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the identity service (e.g. "https://id.example.com/auth/v1")
    pub base_url: String,
    /// Headers attached to every request
    pub default_headers: HeaderMap,
    /// Timeout applied to each request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9999".to_string(),
            default_headers: HeaderMap::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a builder for fluent configuration.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    default_headers: Option<HeaderMap>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the base URL of the identity service.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the headers attached to every request.
    #[must_use]
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration, falling back to defaults for unset fields.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            default_headers: self.default_headers.unwrap_or(defaults.default_headers),
            timeout: self.timeout.unwrap_or(defaults.timeout),
        }
    }
}
