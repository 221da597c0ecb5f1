//! The transport contract.
//!
//! The dispatcher never talks to the network itself. It builds a
//! [`RequestEnvelope`] and hands it to whatever [`Transport`] it was given:
//! [`crate::http_client::HttpTransport`] in production, a recording mock in
//! tests.

use crate::codec::{Params, canonicalize};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::fmt;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    #[default]
    Get,
    /// Parameters travel as a form-encoded body.
    Post,
}

impl HttpMethod {
    /// Uppercase method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a transport needs to perform one call.
///
/// `params` is rendered with [`canonicalize`] both for the GET query string
/// and for the POST body, so a signature computed over the same bag matches
/// the bytes on the wire.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    /// GET for public calls, POST for private calls.
    pub method: HttpMethod,
    /// Endpoint URL without a query string.
    pub url: String,
    /// Parameters, including `command` and (private calls) `nonce`.
    pub params: Params,
    /// Extra headers (`Key`/`Sign` on private calls).
    pub headers: HeaderMap,
}

impl RequestEnvelope {
    /// Creates a public GET envelope.
    pub fn get(url: impl Into<String>, params: Params) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            params,
            headers: HeaderMap::new(),
        }
    }

    /// Creates a POST envelope with the given headers.
    pub fn post(url: impl Into<String>, params: Params, headers: HeaderMap) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            params,
            headers,
        }
    }

    /// Canonical query string (GET).
    pub fn query_string(&self) -> String {
        canonicalize(&self.params)
    }

    /// Canonical form body (POST).
    pub fn body(&self) -> String {
        canonicalize(&self.params)
    }

    /// URL with the query string appended, when there is one.
    pub fn full_url(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.url.clone()
        } else if self.url.contains('?') {
            format!("{}&{}", self.url, query)
        } else {
            format!("{}?{}", self.url, query)
        }
    }

    /// The wire command, if set.
    pub fn command(&self) -> Option<String> {
        self.params.get(crate::codec::COMMAND_KEY).map(ToString::to_string)
    }
}

/// Performs the network exchange for an envelope.
///
/// A successful exchange whose body is empty or JSON `null` must yield
/// [`Value::Null`]; the caller decides what that means. Failures are returned
/// as [`crate::error::Error::Transport`] and are never retried here.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends the request and returns the parsed JSON body.
    async fn send(&self, envelope: RequestEnvelope) -> Result<Value>;
}
