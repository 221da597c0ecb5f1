//! Routes a command to the public or private path and builds its envelope.
//!
//! ```text
//! public_call(cmd, params)             private_call(cmd, params)
//!   params + command                     check credentials  -> CredentialsMissing
//!   GET public_url?canonical(params)     params + command + nonce
//!                                        sign(canonical(params))
//!                                        POST private_url, body = canonical(params),
//!                                        headers Key/Sign
//!            \                                   /
//!             `------> Transport::send ---------'
//!                            |
//!                  Value::Null -> EmptyResponse
//! ```

use super::urls::PoloniexUrls;
use poloniex_core::auth::Signer;
use poloniex_core::codec::{COMMAND_KEY, NONCE_KEY, Params};
use poloniex_core::error::{Error, Result};
use poloniex_core::nonce::NonceSource;
use poloniex_core::transport::{RequestEnvelope, Transport};
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// Builds request envelopes and hands them to the transport.
///
/// Holds no per-call state; the only mutable piece is the nonce counter,
/// which is drawn atomically.
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    transport: Arc<dyn Transport>,
    signer: Signer,
    nonce: Arc<dyn NonceSource>,
    urls: PoloniexUrls,
}

impl RequestDispatcher {
    /// Creates a dispatcher from its collaborators.
    pub fn new(
        transport: Arc<dyn Transport>,
        signer: Signer,
        nonce: Arc<dyn NonceSource>,
        urls: PoloniexUrls,
    ) -> Self {
        Self {
            transport,
            signer,
            nonce,
            urls,
        }
    }

    /// Returns the endpoint URLs.
    pub fn urls(&self) -> &PoloniexUrls {
        &self.urls
    }

    /// Returns true when a private call would get past the credential check.
    pub fn has_credentials(&self) -> bool {
        self.signer.has_credentials()
    }

    /// Unauthenticated GET to the public endpoint.
    ///
    /// `command` is added to the parameters (replacing any caller value) and
    /// the whole bag is sent as the query string.
    pub async fn public_call(&self, command: &str, params: Option<Params>) -> Result<Value> {
        let mut params = params.unwrap_or_default();
        params.insert(COMMAND_KEY, command);

        let envelope = RequestEnvelope::get(self.urls.public.clone(), params);
        debug!(command = command, "public call");

        self.dispatch(command, envelope).await
    }

    /// Signed POST to the private endpoint.
    ///
    /// Fails with [`Error::CredentialsMissing`] before anything else happens
    /// when the key or secret is empty. Otherwise `command` and a fresh nonce
    /// are added, the canonical body is signed, and the body is sent with
    /// `Key`/`Sign` headers.
    pub async fn private_call(&self, command: &str, params: Option<Params>) -> Result<Value> {
        let envelope = self.build_private_envelope(command, params)?;
        debug!(command = command, "private call");

        self.dispatch(command, envelope).await
    }

    /// Builds the signed POST envelope without sending it.
    ///
    /// The nonce is drawn here, so two envelopes built one after the other
    /// carry strictly increasing nonces.
    pub fn build_private_envelope(
        &self,
        command: &str,
        params: Option<Params>,
    ) -> Result<RequestEnvelope> {
        self.signer.check_credentials()?;

        let mut params = params.unwrap_or_default();
        params.insert(COMMAND_KEY, command);
        let nonce = self.nonce.next_nonce()?;
        params.insert(NONCE_KEY, nonce);

        let signed = self.signer.sign(&params)?;
        let mut headers = HeaderMap::new();
        self.signer.add_auth_headers(&mut headers, &signed)?;
        trace!(command = command, nonce = nonce, "signed private request");

        Ok(RequestEnvelope::post(
            self.urls.private.clone(),
            params,
            headers,
        ))
    }

    async fn dispatch(&self, command: &str, envelope: RequestEnvelope) -> Result<Value> {
        match self.transport.send(envelope).await? {
            Value::Null => Err(Error::empty_response(command)),
            value => Ok(value),
        }
    }
}
