//! # Poloniex Rust
//!
//! Async client for the Poloniex HTTP API: unauthenticated market data over
//! GET and HMAC-SHA512 signed trading calls over POST.
//!
//! ## Crates
//!
//! - [`poloniex_core`]: parameter codec, nonce source, signer, transport and errors
//! - [`poloniex_client`]: the [`Poloniex`] client with one method per endpoint
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use poloniex_rust::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let poloniex = Poloniex::builder()
//!         .api_key("your-api-key")
//!         .secret("your-secret")
//!         .build()?;
//!
//!     let volume = poloniex.fetch_24h_volume().await?;
//!     let balances = poloniex.my_balances().await?;
//!     println!("{volume}\n{balances}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub use poloniex_client;
pub use poloniex_core;

pub use poloniex_client::{CurrencyPair, Poloniex, PoloniexBuilder, join_currencies};
pub use poloniex_core::error::{Error, Result};
pub use poloniex_core::logging::{LogConfig, init_logging, try_init_logging};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use poloniex_client::prelude::*;
    pub use poloniex_core::logging::{LogConfig, init_logging, try_init_logging};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_facade_reexports_client() {
        let poloniex = Poloniex::builder().build().unwrap();
        assert!(!poloniex.has_credentials());
        assert_eq!(join_currencies("BTC", Some("ETH")), "BTC_ETH");
    }
}
