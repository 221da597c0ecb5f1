//! Poloniex Core Library
//!
//! The exchange-agnostic half of the Poloniex client: everything needed to
//! turn a command and a parameter bag into a signed HTTP request, plus the
//! transport that sends it.
//!
//! - [`codec`]: deterministic parameter canonicalization (nonce last)
//! - [`nonce`]: strictly increasing per-instance nonces
//! - [`auth`]: HMAC-SHA512 signing and the `Key`/`Sign` headers
//! - [`transport`]: the [`transport::Transport`] contract and request envelope
//! - [`http_client`]: the `reqwest` transport
//! - [`error`]: the error taxonomy shared by every crate in the workspace
//!
//! # Example
//!
//! ```rust
//! use poloniex_core::prelude::*;
//!
//! let signer = Signer::new(Credentials::new("api-key", "secret"));
//! let nonces = MonotonicNonce::new();
//!
//! let mut params = Params::new().with("command", "returnBalances");
//! params.insert("nonce", nonces.next_nonce().unwrap());
//!
//! let body = canonicalize(&params);
//! assert!(body.starts_with("command=returnBalances&nonce="));
//! assert_eq!(signer.sign(&params).unwrap().sign.len(), 128);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::unreadable_literal)]

// Re-exports of external dependencies
pub use rust_decimal;
pub use serde_json;

pub mod auth;
pub mod codec;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http_client;
pub mod logging;
pub mod nonce;
pub mod transport;

pub use auth::{SignedHeaders, Signer};
pub use codec::{ParamValue, Params, canonicalize};
pub use config::{ClientConfig, ClientConfigBuilder, ProxyConfig};
pub use credentials::{Credentials, SecretString};
pub use error::{Error, Result};
pub use http_client::{HttpConfig, HttpTransport};
pub use nonce::{MonotonicNonce, NonceSource};
pub use transport::{HttpMethod, RequestEnvelope, Transport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::auth::{SignedHeaders, Signer};
    pub use crate::codec::{ParamValue, Params, canonicalize};
    pub use crate::config::{ClientConfig, ClientConfigBuilder, ProxyConfig};
    pub use crate::credentials::{Credentials, SecretString};
    pub use crate::error::{ContextExt, Error, Result, TransportError};
    pub use crate::http_client::{HttpConfig, HttpTransport};
    pub use crate::nonce::{MonotonicNonce, NonceSource};
    pub use crate::transport::{HttpMethod, RequestEnvelope, Transport};
    pub use rust_decimal::Decimal;
    pub use serde_json::Value;
}
