//! Transport-level error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Failures raised by the transport while performing the HTTP exchange.
///
/// Wraps network problems without exposing `reqwest` types in the public API.
/// Exchange-specific error payloads (a `200 OK` carrying `{"error": ...}`) are
/// not transport errors; they reach the caller as a successful body.
///
/// # Example
///
/// ```rust
/// use poloniex_core::error::TransportError;
///
/// fn handle(err: &TransportError) {
///     match err {
///         TransportError::RequestFailed { status, message } => {
///             println!("HTTP {}: {}", status, message);
///         }
///         TransportError::Timeout => println!("timed out"),
///         other => println!("transport failure: {}", other),
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportError {
    /// The server answered with a non-2xx status code.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection could not be established or was interrupted.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// TLS handshake or certificate failure.
    #[error("SSL/TLS error: {0}")]
    Ssl(String),

    /// The body could not be parsed as JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// The body exceeded the configured size limit.
    #[error("Response size {size} bytes exceeds limit {limit} bytes")]
    ResponseTooLarge {
        /// Observed (or announced) body size
        size: u64,
        /// Configured limit
        limit: u64,
    },

    /// Opaque underlying failure, source preserved.
    #[error("Transport error")]
    Other(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

/// Fragments that rustls and native TLS put in handshake and certificate
/// failures. reqwest exposes no TLS predicate, so the source chain is searched.
const TLS_MARKERS: [&str; 5] = ["certificate", "tls", "ssl", "handshake", "corrupt message"];

/// Returns true if any error in the chain reads like a TLS failure.
pub(crate) fn is_tls_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        let message = e.to_string().to_ascii_lowercase();
        if TLS_MARKERS.iter().any(|marker| message.contains(marker)) {
            return true;
        }
        current = e.source();
    }
    false
}

fn chain_message(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(e) = current {
        parts.push(e.to_string());
        current = e.source();
    }
    parts.join(": ")
}

impl TransportError {
    /// Maps a `reqwest` error to the matching variant.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() && is_tls_failure(&err) {
            Self::Ssl(chain_message(&err))
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Other(Box::new(err))
        }
    }
}
