//! Poloniex client builder.

use super::Poloniex;
use poloniex_core::config::{ClientConfig, ProxyConfig};
use poloniex_core::credentials::SecretString;
use poloniex_core::error::Result;
use poloniex_core::http_client::HttpTransport;
use poloniex_core::nonce::{MonotonicNonce, NonceSource};
use poloniex_core::transport::Transport;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`Poloniex`].
///
/// ```no_run
/// use poloniex_client::poloniex::PoloniexBuilder;
/// use std::time::Duration;
///
/// let poloniex = PoloniexBuilder::new()
///     .api_key("your-api-key")
///     .secret("your-secret")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoloniexBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    nonce: Option<Arc<dyn NonceSource>>,
}

impl PoloniexBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
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

    /// Overrides the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Enables or disables TLS certificate verification (default: enabled).
    ///
    /// Disabling it accepts self-signed and otherwise invalid certificates.
    /// A warning is logged when the transport is built.
    pub fn strict_ssl(mut self, enabled: bool) -> Self {
        self.config.strict_ssl = enabled;
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

    /// Sets the HTTP proxy.
    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Enables or disables verbose request logging.
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.config.verbose = enabled;
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

    /// Uses a custom transport instead of the `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Uses a custom nonce source.
    ///
    /// Share one source between clients that use the same API key.
    pub fn nonce_source(mut self, nonce: Arc<dyn NonceSource>) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if no transport was supplied and the HTTP transport
    /// cannot be built from the configuration.
    pub fn build(self) -> Result<Poloniex> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.config.http_config())?),
        };
        let nonce = self
            .nonce
            .unwrap_or_else(|| Arc::new(MonotonicNonce::new()));
        Ok(Poloniex::with_parts(self.config, transport, nonce))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poloniex_core::nonce::FixedNonce;

    #[test]
    fn test_builder_default_urls() {
        let poloniex = PoloniexBuilder::new().build().unwrap();
        assert_eq!(poloniex.urls().public, "https://poloniex.com/public");
        assert_eq!(poloniex.urls().private, "https://poloniex.com/tradingApi");
        assert!(!poloniex.has_credentials());
    }

    #[test]
    fn test_builder_with_credentials_and_overrides() {
        let poloniex = PoloniexBuilder::new()
            .api_key("key")
            .secret("secret")
            .public_url("http://localhost:1/public")
            .private_url("http://localhost:1/tradingApi")
            .user_agent("bot/1.0")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert!(poloniex.has_credentials());
        assert_eq!(poloniex.urls().public, "http://localhost:1/public");
        assert_eq!(poloniex.urls().private, "http://localhost:1/tradingApi");
    }

    #[test]
    fn test_config_override_applies_to_its_endpoint_only() {
        let config = ClientConfig::builder()
            .private_url("http://localhost:2/tradingApi")
            .build();
        let poloniex = PoloniexBuilder::from_config(config).build().unwrap();
        assert_eq!(poloniex.urls().public, "https://poloniex.com/public");
        assert_eq!(poloniex.urls().private, "http://localhost:2/tradingApi");
    }

    #[test]
    fn test_builder_rejects_invalid_http_config() {
        let result = PoloniexBuilder::new().timeout(Duration::from_secs(3600)).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_insecure_transport_builds() {
        assert!(PoloniexBuilder::new().strict_ssl(false).build().is_ok());
    }

    #[test]
    fn test_builder_custom_nonce_source() {
        let poloniex = PoloniexBuilder::new()
            .api_key("k")
            .secret("s")
            .nonce_source(Arc::new(FixedNonce(77)))
            .build()
            .unwrap();
        let envelope = poloniex
            .dispatcher()
            .build_private_envelope("returnBalances", None)
            .unwrap();
        assert_eq!(envelope.body(), "command=returnBalances&nonce=77");
    }
}
