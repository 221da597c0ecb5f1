//! API credential types with automatic memory zeroization.
//!
//! The secret half of a [`Credentials`] pair is held in [`SecretBytes`], which
//! is zeroed on drop and redacted in `Debug` output. Nothing outside this crate
//! can read it back; the only consumer is [`crate::auth::Signer`].
//!
//! # Example
//!
//! ```rust
//! use poloniex_core::credentials::Credentials;
//!
//! let creds = Credentials::new("my-api-key", "my-secret");
//! assert!(creds.is_complete());
//! assert_eq!(creds.key(), "my-api-key");
//!
//! // Debug output never shows the secret
//! assert!(!format!("{:?}", creds).contains("my-secret"));
//! ```

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string that is zeroed when dropped and redacted when printed.
///
/// ```rust
/// use poloniex_core::credentials::SecretString;
///
/// let secret = SecretString::new("my-secret-key");
/// assert_eq!(secret.expose_secret(), "my-secret-key");
/// assert_eq!(format!("{:?}", secret), "[REDACTED]");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret value. Use it immediately; do not store it.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns true if the secret string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Opaque secret bytes, zeroed when dropped.
///
/// No public accessor exists; the bytes are readable only inside this crate.
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Creates new secret bytes.
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub(crate) fn expose_secret(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the secret bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the secret bytes are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.0.len())
    }
}

impl From<Vec<u8>> for SecretBytes {
    fn from(v: Vec<u8>) -> Self {
        Self::new(v)
    }
}

impl From<&str> for SecretBytes {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for SecretBytes {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

/// An API key / secret pair.
///
/// Either half may be empty; signing checks [`Credentials::is_complete`] and
/// refuses to proceed otherwise.
#[derive(Clone, Default)]
pub struct Credentials {
    key: String,
    secret: SecretBytes,
}

impl Default for SecretBytes {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(key: impl Into<String>, secret: impl Into<SecretBytes>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Returns the public API key (sent as the `Key` header).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true when both key and secret are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }

    pub(crate) fn secret(&self) -> &SecretBytes {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &self.secret)
            .finish()
    }
}
