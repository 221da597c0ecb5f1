//! Currency pair helpers.

use std::fmt;

/// Separator between base and quote currency in a pair.
pub const PAIR_SEPARATOR: char = '_';

/// Joins two currency codes as `BASE_QUOTE`; a lone code is passed through.
///
/// The API accepts bare keywords such as `all` in place of a pair.
///
/// ```rust
/// use poloniex_client::poloniex::symbol::join_currencies;
///
/// assert_eq!(join_currencies("BTC", Some("ETH")), "BTC_ETH");
/// assert_eq!(join_currencies("all", None), "all");
/// ```
pub fn join_currencies(currency_a: &str, currency_b: Option<&str>) -> String {
    match currency_b {
        Some(currency_b) => format!("{currency_a}{PAIR_SEPARATOR}{currency_b}"),
        None => currency_a.to_string(),
    }
}

/// A `currencyPair` parameter value.
///
/// Built from a ready string (`"BTC_ETH"`, `"all"`) or from two codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair(String);

impl CurrencyPair {
    /// The `all` keyword accepted by endpoints that span every market.
    pub const ALL: &'static str = "all";

    /// Joins two codes with [`join_currencies`].
    pub fn new(currency_a: &str, currency_b: Option<&str>) -> Self {
        Self(join_currencies(currency_a, currency_b))
    }

    /// The pair spanning every market.
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Returns the wire value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits a joined pair into its two codes.
    pub fn split(&self) -> Option<(&str, &str)> {
        self.0.split_once(PAIR_SEPARATOR)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyPair {
    fn from(pair: &str) -> Self {
        Self(pair.to_string())
    }
}

impl From<String> for CurrencyPair {
    fn from(pair: String) -> Self {
        Self(pair)
    }
}

impl From<(&str, &str)> for CurrencyPair {
    fn from((currency_a, currency_b): (&str, &str)) -> Self {
        Self::new(currency_a, Some(currency_b))
    }
}

impl From<(&str, Option<&str>)> for CurrencyPair {
    fn from((currency_a, currency_b): (&str, Option<&str>)) -> Self {
        Self::new(currency_a, currency_b)
    }
}

impl From<CurrencyPair> for poloniex_core::codec::ParamValue {
    fn from(pair: CurrencyPair) -> Self {
        Self::Text(pair.0)
    }
}
