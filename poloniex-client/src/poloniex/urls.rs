//! Poloniex API URLs.

/// Production public (market data) endpoint.
pub const PUBLIC_API_URL: &str = "https://poloniex.com/public";
/// Production private (trading) endpoint.
pub const PRIVATE_API_URL: &str = "https://poloniex.com/tradingApi";

/// Endpoint URLs used by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoloniexUrls {
    /// Public API URL (GET).
    pub public: String,
    /// Private API URL (signed POST).
    pub private: String,
}

impl PoloniexUrls {
    /// Returns production URLs.
    pub fn production() -> Self {
        Self {
            public: PUBLIC_API_URL.to_string(),
            private: PRIVATE_API_URL.to_string(),
        }
    }

    /// Applies optional overrides, e.g. a mock server in tests.
    pub fn with_overrides(mut self, public: Option<&str>, private: Option<&str>) -> Self {
        if let Some(public) = public {
            self.public = public.to_string();
        }
        if let Some(private) = private {
            self.private = private.to_string();
        }
        self
    }
}

impl Default for PoloniexUrls {
    fn default() -> Self {
        Self::production()
    }
}
