//! # Error Handling
//!
//! Every fallible operation in the client returns [`Result<T>`], whose error
//! side is the [`Error`] enum below. The taxonomy is deliberately small:
//!
//! ```text
//! Error
//! ├── CredentialsMissing - key or secret absent; raised before any request is built
//! ├── EmptyResponse      - the exchange answered with no body (or `null`)
//! ├── Transport          - network / HTTP-layer failure (via TransportError)
//! ├── InvalidRequest     - local misuse: bad header value, invalid configuration
//! └── Context            - any of the above with an attached context message
//! ```
//!
//! Errors are never retried or logged by the library; they are returned to the
//! immediate caller as-is.
//!
//! ## Quick Start
//!
//! ```rust
//! use poloniex_core::error::{Error, Result};
//!
//! fn require_pair(pair: &str) -> Result<&str> {
//!     if pair.is_empty() {
//!         return Err(Error::invalid_request("currency pair cannot be empty"));
//!     }
//!     Ok(pair)
//! }
//! ```
//!
//! ## Telling failure classes apart
//!
//! ```rust
//! use poloniex_core::error::{Error, TransportError};
//!
//! fn describe(err: &Error) -> &'static str {
//!     if err.is_credentials_missing() {
//!         "configure an API key and secret"
//!     } else if err.is_empty_response() {
//!         "exchange returned nothing: maintenance or throttling"
//!     } else if let Some(TransportError::Timeout) = err.as_transport() {
//!         "request timed out"
//!     } else {
//!         "other failure"
//!     }
//! }
//! ```

mod config;
mod context;
mod transport;

use std::borrow::Cow;
use std::error::Error as StdError;
use thiserror::Error;

pub use config::{ConfigValidationError, ValidationResult};
pub use context::ContextExt;
pub use transport::TransportError;

/// Result type alias for all client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error type of the Poloniex client.
///
/// `Transport` is boxed so the enum stays small; message fields use
/// `Cow<'static, str>` so static messages do not allocate.
///
/// # Example
///
/// ```rust
/// use poloniex_core::error::Error;
///
/// let err = Error::credentials_missing("API key and secret required");
/// assert!(err.is_credentials_missing());
/// assert!(err.to_string().contains("API key and secret required"));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// API key or secret is absent. Raised locally, before any network attempt.
    #[error("Credentials missing: {0}")]
    CredentialsMissing(Cow<'static, str>),

    /// The transport succeeded but the response body was empty or `null`.
    ///
    /// This usually signals throttling or maintenance rather than a
    /// connectivity problem.
    #[error("Empty response for command '{command}'")]
    EmptyResponse {
        /// Wire command of the call that received the empty body.
        command: String,
    },

    /// Network or HTTP-layer failure, passed through from the transport.
    #[error("Transport error: {0}")]
    Transport(Box<TransportError>),

    /// Invalid local input (header value, configuration, parameter).
    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),

    /// Error with additional context, preserving the error chain.
    #[error("{context}")]
    Context {
        /// Context message describing what operation failed
        context: String,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates a credentials-missing error.
    pub fn credentials_missing(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::CredentialsMissing(msg.into())
    }

    /// Creates an empty-response error for the given wire command.
    pub fn empty_response(command: impl Into<String>) -> Self {
        Self::EmptyResponse {
            command: command.into(),
        }
    }

    /// Creates a transport error from a connection failure message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Transport(Box::new(TransportError::ConnectionFailed(msg.into())))
    }

    /// Creates a transport error for a non-2xx HTTP status.
    pub fn request_failed(status: u16, message: impl Into<String>) -> Self {
        Self::Transport(Box::new(TransportError::RequestFailed {
            status,
            message: message.into(),
        }))
    }

    /// Creates an invalid request error.
    pub fn invalid_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    // ==================== Context Methods ====================

    /// Attaches context to an existing error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use poloniex_core::error::Error;
    ///
    /// let err = Error::connection("Connection refused")
    ///     .context("Failed to fetch ticker");
    /// assert!(err.as_transport().is_some());
    /// ```
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    fn iter_chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| match err {
            Error::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        })
    }

    /// Returns the root cause of the error, skipping Context layers.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        self.iter_chain().last().unwrap_or(self)
    }

    /// Generates a report with the full error chain, one cause per line.
    #[must_use]
    pub fn report(&self) -> String {
        use std::fmt::Write;
        let mut report = self.to_string();

        let mut current: Option<&(dyn StdError + 'static)> = self.source();
        while let Some(err) = current {
            let _ = write!(report, "\nCaused by: {err}");
            current = err.source();
        }
        report
    }

    // ==================== Helper Methods (Context Penetrating) ====================

    /// Returns `true` if the root cause is [`Error::CredentialsMissing`].
    #[must_use]
    pub fn is_credentials_missing(&self) -> bool {
        matches!(self.root_cause(), Error::CredentialsMissing(_))
    }

    /// Returns `true` if the root cause is [`Error::EmptyResponse`].
    #[must_use]
    pub fn is_empty_response(&self) -> bool {
        matches!(self.root_cause(), Error::EmptyResponse { .. })
    }

    /// Returns the transport failure, if this is one.
    #[must_use]
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self.root_cause() {
            Error::Transport(te) => Some(te.as_ref()),
            _ => None,
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Self::Transport(Box::new(e))
    }
}

impl From<ConfigValidationError> for Error {
    fn from(e: ConfigValidationError) -> Self {
        Self::InvalidRequest(Cow::Owned(e.to_string()))
    }
}

#[cfg(test)]
mod tests;
