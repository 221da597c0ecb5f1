use crate::config::ProxyConfig;
use crate::error::{ConfigValidationError, ValidationResult};
use std::time::Duration;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout, covering connect, send and body read
    pub timeout: Duration,
    /// TCP connection timeout (default: 10 seconds)
    pub connect_timeout: Duration,
    /// Whether to log request bodies and response previews
    pub verbose: bool,
    /// User-Agent header value
    pub user_agent: String,
    /// Verify TLS certificates. Turning this off accepts any certificate.
    pub strict_ssl: bool,
    /// Optional proxy configuration
    pub proxy: Option<ProxyConfig>,
    /// Maximum response body size in bytes (default: 10MB)
    ///
    /// Larger bodies are rejected with `TransportError::ResponseTooLarge`
    /// before they are fully buffered.
    pub max_response_size: usize,
    /// Maximum number of idle connections per host in the connection pool.
    pub pool_max_idle_per_host: usize,
    /// Timeout for idle pooled connections.
    pub pool_idle_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            verbose: false,
            user_agent: format!("poloniex-rust/{}", env!("CARGO_PKG_VERSION")),
            strict_ssl: true,
            proxy: None,
            max_response_size: 10 * 1024 * 1024,
            pool_max_idle_per_host: 10,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl HttpConfig {
    /// Validates the configuration.
    ///
    /// - `timeout` above 5 minutes is an error, below 1 second a warning
    /// - `connect_timeout` of zero is an error
    /// - `max_response_size` of zero is an error
    /// - `strict_ssl == false` is a warning
    ///
    /// ```rust
    /// use poloniex_core::http_client::HttpConfig;
    /// use std::time::Duration;
    ///
    /// assert!(HttpConfig::default().validate().is_ok());
    ///
    /// let invalid = HttpConfig {
    ///     timeout: Duration::from_secs(600),
    ///     ..Default::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> std::result::Result<ValidationResult, ConfigValidationError> {
        let mut warnings = Vec::new();

        if self.timeout > Duration::from_secs(300) {
            return Err(ConfigValidationError::too_high(
                "timeout",
                format!("{:?}", self.timeout),
                "5 minutes",
            ));
        }
        if self.timeout.is_zero() {
            return Err(ConfigValidationError::invalid(
                "timeout",
                "timeout cannot be zero",
            ));
        }
        if self.timeout < Duration::from_secs(1) {
            warnings.push(format!(
                "timeout {:?} is very short, may cause frequent timeouts",
                self.timeout
            ));
        }

        if self.connect_timeout.is_zero() {
            return Err(ConfigValidationError::invalid(
                "connect_timeout",
                "connect_timeout cannot be zero",
            ));
        }

        if self.max_response_size == 0 {
            return Err(ConfigValidationError::invalid(
                "max_response_size",
                "max_response_size cannot be zero",
            ));
        }

        if !self.strict_ssl {
            warnings.push("TLS certificate verification is disabled".to_string());
        }

        Ok(ValidationResult::with_warnings(warnings))
    }
}
