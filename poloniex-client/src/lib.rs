//! Poloniex Exchange Client
//!
//! Public market data and signed trading calls for the Poloniex HTTP API,
//! built on `poloniex-core`.
//!
//! # Example
//!
//! ```rust,no_run
//! use poloniex_client::poloniex::Poloniex;
//! use rust_decimal_macros::dec;
//!
//! # async fn example() -> poloniex_core::Result<()> {
//! let poloniex = Poloniex::builder()
//!     .api_key("your-api-key")
//!     .secret("your-secret")
//!     .build()?;
//!
//! let tickers = poloniex.fetch_ticker().await?;
//! let order = poloniex.buy("BTC", Some("ETH"), dec!(0.035), dec!(1.5)).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::return_self_not_must_use)]

pub mod poloniex;

pub use poloniex::{
    CurrencyPair, Poloniex, PoloniexBuilder, PoloniexUrls, RequestDispatcher, join_currencies,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::poloniex::{
        CurrencyPair, Poloniex, PoloniexBuilder, PoloniexUrls, RequestDispatcher,
        join_currencies,
    };
    pub use poloniex_core::prelude::*;
}
