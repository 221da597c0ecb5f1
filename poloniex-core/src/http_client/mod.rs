//! HTTP transport
//!
//! [`HttpTransport`] implements [`crate::transport::Transport`] on top of
//! `reqwest`:
//! - GET sends the canonical parameter string as the query
//! - POST sends it as an `application/x-www-form-urlencoded` body
//! - response bodies are streamed under a size limit and parsed as JSON
//! - an empty body (or literal `null`) becomes `Value::Null`
//!
//! # Example
//!
//! ```rust,no_run
//! use poloniex_core::codec::Params;
//! use poloniex_core::http_client::{HttpConfig, HttpTransport};
//! use poloniex_core::transport::{RequestEnvelope, Transport};
//!
//! # async fn run() -> poloniex_core::error::Result<()> {
//! let transport = HttpTransport::new(HttpConfig::default())?;
//! let envelope = RequestEnvelope::get(
//!     "https://poloniex.com/public",
//!     Params::new().with("command", "returnTicker"),
//! );
//! let tickers = transport.send(envelope).await?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod request;
mod response;


pub use builder::HttpTransport;
pub use config::HttpConfig;
