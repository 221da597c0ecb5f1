//! Client configuration.

use crate::credentials::{Credentials, SecretString};
use crate::http_client::HttpConfig;
use std::time::Duration;

/// Proxy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy URL (e.g., "http://127.0.0.1:8080").
    pub url: String,
    /// Optional username for authentication.
    pub username: Option<String>,
    /// Optional password for authentication.
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Creates a proxy configuration with just a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Sets basic-auth credentials for the proxy.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// Everything needed to construct a client.
///
/// Credentials are optional: a client without them can still make public
/// calls, and private calls fail with `CredentialsMissing`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key (zeroed on drop)
    pub api_key: Option<SecretString>,
    /// API secret (zeroed on drop)
    pub secret: Option<SecretString>,
    /// Request timeout (default: 30 seconds)
    pub timeout: Duration,
    /// TCP connection timeout (default: 10 seconds)
    pub connect_timeout: Duration,
    /// Custom user agent; `None` uses `poloniex-rust/<version>`
    pub user_agent: Option<String>,
    /// Verify TLS certificates (default: true)
    pub strict_ssl: bool,
    /// HTTP proxy configuration
    pub proxy: Option<ProxyConfig>,
    /// Log request bodies and response previews at debug level
    pub verbose: bool,
    /// Maximum accepted response body size in bytes
    pub max_response_size: usize,
    /// Replaces the public (market data) endpoint URL
    pub public_url: Option<String>,
    /// Replaces the private (trading) endpoint URL
    pub private_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let http = HttpConfig::default();
        Self {
            api_key: None,
            secret: None,
            timeout: http.timeout,
            connect_timeout: http.connect_timeout,
            user_agent: None,
            strict_ssl: true,
            proxy: None,
            verbose: false,
            max_response_size: http.max_response_size,
            public_url: None,
            private_url: None,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration builder.
    ///
    /// ```rust
    /// use poloniex_core::config::ClientConfig;
    ///
    /// let config = ClientConfig::builder()
    ///     .api_key("your-api-key")
    ///     .secret("your-secret")
    ///     .build();
    /// assert!(config.credentials().is_complete());
    /// ```
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Builds the credential pair. Missing halves become empty strings.
    pub fn credentials(&self) -> Credentials {
        let key = self
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().to_string())
            .unwrap_or_default();
        let secret = self
            .secret
            .as_ref()
            .map(|s| s.expose_secret())
            .unwrap_or_default();
        Credentials::new(key, secret)
    }

    /// Derives the transport configuration.
    pub fn http_config(&self) -> HttpConfig {
        let mut http = HttpConfig {
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            strict_ssl: self.strict_ssl,
            proxy: self.proxy.clone(),
            verbose: self.verbose,
            max_response_size: self.max_response_size,
            ..HttpConfig::default()
        };
        if let Some(user_agent) = &self.user_agent {
            http.user_agent.clone_from(user_agent);
        }
        http
    }
}

/// Fluent builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(key));
        self
    }

    /// Sets the API secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.config.secret = Some(SecretString::new(secret));
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the TCP connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Enables or disables TLS certificate verification.
    pub fn strict_ssl(mut self, enabled: bool) -> Self {
        self.config.strict_ssl = enabled;
        self
    }

    /// Sets the HTTP proxy configuration.
    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Sets the HTTP proxy URL.
    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.config.proxy = Some(ProxyConfig::new(url));
        self
    }

    /// Enables or disables verbose logging.
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.config.verbose = enabled;
        self
    }

    /// Sets the maximum response body size.
    pub fn max_response_size(mut self, bytes: usize) -> Self {
        self.config.max_response_size = bytes;
        self
    }

    /// Overrides the public endpoint URL.
    pub fn public_url(mut self, url: impl Into<String>) -> Self {
        self.config.public_url = Some(url.into());
        self
    }

    /// Overrides the private endpoint URL.
    pub fn private_url(mut self, url: impl Into<String>) -> Self {
        self.config.private_url = Some(url.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
