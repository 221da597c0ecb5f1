use crate::error::{Error, Result};
use reqwest::Client;
use tracing::warn;

use super::config::HttpConfig;

/// reqwest-backed [`crate::transport::Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: HttpConfig,
}

impl HttpTransport {
    /// Creates a transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails [`HttpConfig::validate`]
    /// - The proxy URL is invalid
    /// - The underlying HTTP client cannot be built
    pub fn new(config: HttpConfig) -> Result<Self> {
        let validation = config.validate()?;
        for warning in &validation.warnings {
            warn!(warning = %warning, "HTTP configuration warning");
        }

        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .gzip(true)
            .user_agent(&config.user_agent);

        if !config.strict_ssl {
            warn!("strict_ssl is off: TLS certificates will not be verified");
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(proxy_config) = &config.proxy {
            let mut proxy = reqwest::Proxy::all(&proxy_config.url)
                .map_err(|e| Error::invalid_request(format!("Invalid proxy URL: {e}")))?;

            if let (Some(username), Some(password)) =
                (&proxy_config.username, &proxy_config.password)
            {
                proxy = proxy.basic_auth(username, password);
            }
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}
