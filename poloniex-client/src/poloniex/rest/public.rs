//! Public market data.

use super::commands;
use super::keys;
use crate::poloniex::Poloniex;
use crate::poloniex::symbol::CurrencyPair;
use poloniex_core::codec::Params;
use poloniex_core::error::Result;
use serde_json::Value;

impl Poloniex {
    /// Tickers for every market (`returnTicker`).
    pub async fn fetch_ticker(&self) -> Result<Value> {
        self.public_call(commands::RETURN_TICKER, None).await
    }

    /// 24-hour volume per market and totals (`return24hVolume`).
    pub async fn fetch_24h_volume(&self) -> Result<Value> {
        self.public_call(commands::RETURN_24H_VOLUME, None).await
    }

    /// Order book for `currency_a[_currency_b]` (`returnOrderBook`).
    ///
    /// Pass `("all", None)` for every market.
    pub async fn fetch_order_book(&self, currency_a: &str, currency_b: Option<&str>) -> Result<Value> {
        self.public_call(commands::RETURN_ORDER_BOOK, Some(pair_params(currency_a, currency_b)))
            .await
    }

    /// Recent market trades for a pair (`returnTradeHistory`, public).
    pub async fn fetch_trade_history(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
    ) -> Result<Value> {
        self.public_call(
            commands::RETURN_TRADE_HISTORY,
            Some(pair_params(currency_a, currency_b)),
        )
        .await
    }
}

pub(super) fn pair_params(currency_a: &str, currency_b: Option<&str>) -> Params {
    Params::new().with(keys::CURRENCY_PAIR, CurrencyPair::new(currency_a, currency_b))
}
