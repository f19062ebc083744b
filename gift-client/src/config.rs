//! Client configuration

use crate::{ClientError, ClientResult};

/// Default backend when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration for connecting to the storefront API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds; `None` leaves it to the transport
    pub timeout: Option<u64>,

    /// Backends the user may switch between. Empty means any URL is accepted.
    pub backends: Vec<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            backends: Vec::new(),
        }
    }

    /// Load configuration from the environment (and `.env`, if present)
    ///
    /// - `GIFT_BACKEND_URL`: base URL
    /// - `GIFT_HTTP_TIMEOUT`: request timeout in seconds
    /// - `GIFT_BACKENDS`: comma-separated list of selectable backends
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();

        let mut config = Self::new(
            std::env::var("GIFT_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        );

        if let Ok(raw) = std::env::var("GIFT_HTTP_TIMEOUT") {
            let secs = raw
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("invalid GIFT_HTTP_TIMEOUT: {raw}")))?;
            config.timeout = Some(secs);
        }

        if let Ok(raw) = std::env::var("GIFT_BACKENDS") {
            config = config.with_backends(parse_backends(&raw));
        }

        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the selectable backends
    pub fn with_backends<I, S>(mut self, backends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backends = backends.into_iter().map(Into::into).collect();
        self
    }

    /// Switch to another backend
    ///
    /// Fails if a backend list is configured and `url` is not on it.
    pub fn select_backend(&mut self, url: &str) -> ClientResult<()> {
        if !self.backends.is_empty() && !self.backends.iter().any(|b| b == url) {
            return Err(ClientError::Config(format!("unknown backend: {url}")));
        }
        self.base_url = url.to_string();
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn parse_backends(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert!(config.backends.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://api.example.com")
            .with_timeout(10)
            .with_backends(["http://a:8080", "http://b:8080"]);

        assert_eq!(config.timeout, Some(10));
        assert_eq!(config.backends.len(), 2);
    }

    #[test]
    fn test_select_backend() {
        let mut config =
            ClientConfig::new("http://a:8080").with_backends(["http://a:8080", "http://b:8080"]);

        config.select_backend("http://b:8080").unwrap();
        assert_eq!(config.base_url, "http://b:8080");

        assert!(matches!(
            config.select_backend("http://evil:8080"),
            Err(ClientError::Config(_))
        ));
        assert_eq!(config.base_url, "http://b:8080");
    }

    #[test]
    fn test_select_any_backend_without_list() {
        let mut config = ClientConfig::default();
        config.select_backend("http://anywhere:9000").unwrap();
        assert_eq!(config.base_url, "http://anywhere:9000");
    }

    #[test]
    fn test_parse_backends() {
        assert_eq!(
            parse_backends(" http://a:8080, ,http://b:8080 ,"),
            vec!["http://a:8080".to_string(), "http://b:8080".to_string()]
        );
    }
}
