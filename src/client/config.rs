//! Client configuration options.

use std::time::Duration;

use crate::Environment;

/// Configuration for the Mondo client.
///
/// # Example
///
/// ```
/// use mondo_rs::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::Staging)
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
///
/// assert_eq!(config.base_url, "https://staging-api.gmon.io");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Request timeout; `None` waits for the server indefinitely
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Environment::Production.api_base_url().to_string(),
            timeout: None,
            user_agent: format!("mondo-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at one of the known environments.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.base_url = env.api_base_url().to_string();
        self
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://production-api.gmon.io");
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("mondo-rs/"));
    }

    #[test]
    fn test_base_url_override_trims_slash() {
        let config = ClientConfig::new().with_base_url("https://example.com/");
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
