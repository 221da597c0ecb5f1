//! Request signing for private calls.
//!
//! A private call is authenticated by two headers:
//!
//! - `Key`: the public API key
//! - `Sign`: lowercase hex HMAC-SHA512 of the exact request body, keyed by the secret
//!
//! The body is the canonical form of the parameters produced by
//! [`crate::codec::canonicalize`], so the bytes signed and the bytes sent are
//! the same string.

use crate::codec::{Params, canonicalize};
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the public API key.
pub const KEY_HEADER: &str = "Key";
/// Header carrying the request signature.
pub const SIGN_HEADER: &str = "Sign";

/// The pair of authentication header values for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Public API key.
    pub key: String,
    /// Lowercase hex HMAC-SHA512 signature (128 characters).
    pub sign: String,
}

/// Signs private requests with an API key/secret pair.
///
/// # Example
///
/// ```rust
/// use poloniex_core::auth::Signer;
/// use poloniex_core::codec::Params;
/// use poloniex_core::credentials::Credentials;
///
/// let signer = Signer::new(Credentials::new("api-key", "secret"));
/// let params = Params::new().with("command", "returnBalances").with("nonce", 1u64);
/// let signed = signer.sign(&params).unwrap();
/// assert_eq!(signed.key, "api-key");
/// assert_eq!(signed.sign.len(), 128);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    /// Creates a signer over the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Returns the public API key.
    pub fn key(&self) -> &str {
        self.credentials.key()
    }

    /// Returns true when both key and secret are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_complete()
    }

    /// Fails with [`Error::CredentialsMissing`] unless both halves are present.
    pub fn check_credentials(&self) -> Result<()> {
        if self.credentials.is_complete() {
            Ok(())
        } else {
            Err(Error::credentials_missing(
                "API key and secret are required for private calls",
            ))
        }
    }

    /// Signs a raw message and returns the lowercase hex digest.
    pub fn sign_message(&self, message: &str) -> Result<String> {
        self.check_credentials()?;
        let mut mac = HmacSha512::new_from_slice(self.credentials.secret().expose_secret())
            .map_err(|e| Error::invalid_request(format!("Invalid HMAC key: {e}")))?;
        mac.update(message.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Signs the canonical encoding of `params`.
    ///
    /// The caller is expected to have inserted the nonce already; the
    /// signature covers exactly what [`canonicalize`] returns.
    pub fn sign(&self, params: &Params) -> Result<SignedHeaders> {
        let sign = self.sign_message(&canonicalize(params))?;
        Ok(SignedHeaders {
            key: self.credentials.key().to_string(),
            sign,
        })
    }

    /// Inserts the `Key` and `Sign` headers.
    pub fn add_auth_headers(&self, headers: &mut HeaderMap, signed: &SignedHeaders) -> Result<()> {
        headers.insert(
            HeaderName::from_static("key"),
            header_value(KEY_HEADER, &signed.key)?,
        );
        headers.insert(
            HeaderName::from_static("sign"),
            header_value(SIGN_HEADER, &signed.sign)?,
        );
        Ok(())
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| Error::invalid_request(format!("Invalid {name} header value: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::NONCE_KEY;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sign_known_vector() {
        let signer = Signer::new(Credentials::new("k", "secret"));
        let params = Params::new()
            .with("nonce", 1u64)
            .with("command", "returnBalances");
        let signed = signer.sign(&params).unwrap();
        assert_eq!(
            signed.sign,
            "c288f881a6808d0e78827ec6ca9d6b9c34ec1667077163030d6d7abb2b22545631176f528347ab0fd6671ec53aec1f7d3b6de8b8e3ccc23de62fd59452d70db5"
        );
        assert_eq!(signed.key, "k");
    }

    #[test]
    fn test_sign_order_vector() {
        let signer = Signer::new(Credentials::new("k", "mysecret"));
        let params = Params::new()
            .with("command", "buy")
            .with("currencyPair", "BTC_ETH")
            .with("rate", dec!(1.0))
            .with("amount", dec!(2.0))
            .with(NONCE_KEY, 1_700_000_000_000_000u64);
        assert_eq!(
            canonicalize(&params),
            "amount=2.0&command=buy&currencyPair=BTC_ETH&rate=1.0&nonce=1700000000000000"
        );
        assert_eq!(
            signer.sign(&params).unwrap().sign,
            "eb22abc5265faddca6b7b066f70d2859f5a3d9e1ce66fc03bb9e361358c83f42eb03dd298d25eecb093f94f22d7d787dda48103337c79805bd62ca308a9bd0bf"
        );
    }

    #[test]
    fn test_sign_empty_message() {
        let signer = Signer::new(Credentials::new("k", "key"));
        assert_eq!(
            signer.sign_message("").unwrap(),
            "84fa5aa0279bbc473267d05a53ea03310a987cecc4c1535ff29b6d76b8f1444a728df3aadb89d4a9a6709e1998f373566e8f824a8ca93b1821f0b69bc2a2f65e"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signer = Signer::new(Credentials::new("k", "s"));
        let sig = signer.sign_message("command=returnBalances&nonce=5").unwrap();
        assert_eq!(sig.len(), 128);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_missing_credentials_rejected() {
        for creds in [
            Credentials::default(),
            Credentials::new("key", ""),
            Credentials::new("", "secret"),
        ] {
            let signer = Signer::new(creds);
            assert!(!signer.has_credentials());
            let err = signer.sign(&Params::new()).unwrap_err();
            assert!(err.is_credentials_missing());
        }
    }

    #[test]
    fn test_add_auth_headers() {
        let signer = Signer::new(Credentials::new("api-key", "secret"));
        let signed = signer.sign(&Params::new().with("nonce", 9u64)).unwrap();
        let mut headers = HeaderMap::new();
        signer.add_auth_headers(&mut headers, &signed).unwrap();
        assert_eq!(headers.get(KEY_HEADER).unwrap(), "api-key");
        assert_eq!(headers.get(SIGN_HEADER).unwrap().to_str().unwrap(), signed.sign);
        assert!(headers.get(SIGN_HEADER).unwrap().is_sensitive());
    }

    #[test]
    fn test_add_auth_headers_rejects_control_chars() {
        let signer = Signer::new(Credentials::new("bad\nkey", "secret"));
        let signed = signer.sign(&Params::new()).unwrap();
        let mut headers = HeaderMap::new();
        let err = signer.add_auth_headers(&mut headers, &signed).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let signer = Signer::new(Credentials::new("api-key", "hunter2"));
        assert!(!format!("{signer:?}").contains("hunter2"));
    }
}
