//! Poloniex exchange client.
//!
//! ```rust,no_run
//! use poloniex_client::poloniex::Poloniex;
//!
//! # async fn example() -> poloniex_core::Result<()> {
//! let poloniex = Poloniex::builder()
//!     .api_key("your-api-key")
//!     .secret("your-secret")
//!     .build()?;
//!
//! let book = poloniex.fetch_order_book("BTC", Some("ETH")).await?;
//! let balances = poloniex.my_balances().await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod dispatcher;
pub mod rest;
pub mod symbol;
pub mod urls;

use poloniex_core::auth::Signer;
use poloniex_core::codec::Params;
use poloniex_core::config::ClientConfig;
use poloniex_core::error::Result;
use poloniex_core::http_client::HttpTransport;
use poloniex_core::nonce::{MonotonicNonce, NonceSource};
use poloniex_core::transport::Transport;
use serde_json::Value;
use std::sync::Arc;

pub use builder::PoloniexBuilder;
pub use dispatcher::RequestDispatcher;
pub use symbol::{CurrencyPair, join_currencies};
pub use urls::PoloniexUrls;

/// Poloniex client.
///
/// Cheap to clone; clones share the transport and the nonce counter, so
/// private calls from any clone draw from one strictly increasing sequence.
#[derive(Debug, Clone)]
pub struct Poloniex {
    dispatcher: RequestDispatcher,
}

impl Poloniex {
    /// Creates a client with the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.http_config())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::with_parts(config, transport, Arc::new(MonotonicNonce::new()))
    }

    pub(crate) fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        nonce: Arc<dyn NonceSource>,
    ) -> Self {
        let urls = PoloniexUrls::production()
            .with_overrides(config.public_url.as_deref(), config.private_url.as_deref());
        let signer = Signer::new(config.credentials());
        Self {
            dispatcher: RequestDispatcher::new(transport, signer, nonce, urls),
        }
    }

    /// Returns a builder.
    pub fn builder() -> PoloniexBuilder {
        PoloniexBuilder::new()
    }

    /// Returns the request dispatcher.
    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    /// Returns the endpoint URLs in use.
    pub fn urls(&self) -> &PoloniexUrls {
        self.dispatcher.urls()
    }

    /// Returns true when private calls can be signed.
    pub fn has_credentials(&self) -> bool {
        self.dispatcher.has_credentials()
    }

    /// Sends any public command. See [`RequestDispatcher::public_call`].
    pub async fn public_call(&self, command: &str, params: Option<Params>) -> Result<Value> {
        self.dispatcher.public_call(command, params).await
    }

    /// Sends any private command. See [`RequestDispatcher::private_call`].
    pub async fn private_call(&self, command: &str, params: Option<Params>) -> Result<Value> {
        self.dispatcher.private_call(command, params).await
    }
}
