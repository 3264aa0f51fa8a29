//! Client configuration types.

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`crate::JsonApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for the whole exchange (connect, send, receive), measured
    /// from request start.
    pub timeout: Duration,
    /// Whether to retain the raw, undecoded response body on the
    /// [`crate::Response`] alongside the decoded document.
    pub keep_raw_body: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            keep_raw_body: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    timeout: Option<Duration>,
    keep_raw_body: Option<bool>,
}

impl ClientConfigBuilder {
    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether raw response bodies are retained.
    #[must_use]
    pub const fn keep_raw_body(mut self, keep: bool) -> Self {
        self.keep_raw_body = Some(keep);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            keep_raw_body: self.keep_raw_body.unwrap_or(defaults.keep_raw_body),
        }
    }
}
