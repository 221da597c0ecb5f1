//! Parameter bags and their canonical encoding.
//!
//! The signature of a private call is computed over the canonical string of
//! its parameters, and the very same string is sent as the request body. Both
//! therefore go through [`canonicalize`], so the bytes that are signed and the
//! bytes that are sent cannot drift apart.
//!
//! # Ordering
//!
//! Keys are ordered by [`sort_parameters`]: `nonce` always sorts last, every
//! other key sorts ascending by byte value. The remote verifier depends on this
//! exact order; plain alphabetical order would put `nonce` between `command`
//! and `rate` and the signature would be rejected.
//!
//! # Example
//!
//! ```rust
//! use poloniex_core::codec::{Params, canonicalize};
//!
//! let params = Params::new()
//!     .with("nonce", 42u64)
//!     .with("rate", "0.5")
//!     .with("command", "buy");
//!
//! assert_eq!(canonicalize(&params), "command=buy&rate=0.5&nonce=42");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Name of the parameter that must sort last.
pub const NONCE_KEY: &str = "nonce";

/// Name of the parameter carrying the wire command.
pub const COMMAND_KEY: &str = "command";

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Free-form text (currency pairs, addresses, order numbers).
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer (nonces, order numbers).
    Unsigned(u64),
    /// Decimal number (rates, amounts). Rendered with its own scale.
    Decimal(Decimal),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        Self::Unsigned(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Unsigned(u64::from(n))
    }
}

impl From<Decimal> for ParamValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

/// An unordered bag of request parameters.
///
/// Insertion order is irrelevant; iteration order of the bag itself is not the
/// wire order either. Use [`canonicalize`] to obtain the wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter only when `value` is `Some`.
    pub fn with_optional<V: Into<ParamValue>>(
        mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        if let Some(v) = value {
            self.insert(key, v);
        }
        self
    }

    /// Inserts or replaces a parameter, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in storage order (not wire order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the keys in wire order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.0.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| sort_parameters(a, b));
        keys
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Orders parameter keys: `nonce` last, everything else ascending.
pub fn sort_parameters(a: &str, b: &str) -> Ordering {
    match (a == NONCE_KEY, b == NONCE_KEY) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

/// Percent-encodes one key or value.
///
/// Alphanumerics and `-_.~` pass through, everything else becomes `%XX`
/// (UTF-8 bytes, upper-case hex).
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Renders the bag as `k1=v1&k2=v2...` in wire order.
///
/// An empty bag yields an empty string.
pub fn canonicalize(params: &Params) -> String {
    params
        .sorted_keys()
        .into_iter()
        .filter_map(|key| {
            params.get(key).map(|value| {
                format!(
                    "{}={}",
                    percent_encode(key),
                    percent_encode(&value.to_string())
                )
            })
        })
        .collect::<Vec<_>>()
        .join("&")
}
