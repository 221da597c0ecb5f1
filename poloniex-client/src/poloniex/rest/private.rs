//! Private account and trading operations.
//!
//! Every method fails with `CredentialsMissing` before touching the network
//! when the client has no key or secret.

use super::commands;
use super::keys;
use super::public::pair_params;
use crate::poloniex::Poloniex;
use crate::poloniex::symbol::CurrencyPair;
use poloniex_core::codec::Params;
use poloniex_core::error::Result;
use rust_decimal::Decimal;
use serde_json::Value;

impl Poloniex {
    /// Available balances per currency (`returnBalances`).
    pub async fn my_balances(&self) -> Result<Value> {
        self.private_call(commands::RETURN_BALANCES, None).await
    }

    /// Open orders for a pair (`returnOpenOrders`).
    pub async fn my_open_orders(&self, currency_a: &str, currency_b: Option<&str>) -> Result<Value> {
        self.private_call(
            commands::RETURN_OPEN_ORDERS,
            Some(pair_params(currency_a, currency_b)),
        )
        .await
    }

    /// Open orders on every market (`allMyOpenOrders`, pair fixed to `all`).
    pub async fn all_my_open_orders(&self) -> Result<Value> {
        let params = Params::new().with(keys::CURRENCY_PAIR, CurrencyPair::all());
        self.private_call(commands::ALL_MY_OPEN_ORDERS, Some(params)).await
    }

    /// Own trade history for a pair (`returnTradeHistory`, private).
    pub async fn my_trade_history(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
    ) -> Result<Value> {
        self.private_call(
            commands::RETURN_TRADE_HISTORY,
            Some(pair_params(currency_a, currency_b)),
        )
        .await
    }

    /// Places a limit buy order (`buy`).
    pub async fn buy(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<Value> {
        self.private_call(commands::BUY, Some(order_params(currency_a, currency_b, rate, amount)))
            .await
    }

    /// Places a limit sell order (`sell`).
    pub async fn sell(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<Value> {
        self.private_call(commands::SELL, Some(order_params(currency_a, currency_b, rate, amount)))
            .await
    }

    /// Cancels an order (`cancelOrder`).
    pub async fn cancel_order(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
        order_number: &str,
    ) -> Result<Value> {
        let params = pair_params(currency_a, currency_b).with(keys::ORDER_NUMBER, order_number);
        self.private_call(commands::CANCEL_ORDER, Some(params)).await
    }

    /// Cancels an order and places a new one at `rate` (`moveOrder`).
    ///
    /// `amount` is omitted from the request when `None`, which keeps the
    /// remaining amount of the original order.
    pub async fn move_order(
        &self,
        order_number: &str,
        rate: Decimal,
        amount: Option<Decimal>,
    ) -> Result<Value> {
        let params = Params::new()
            .with(keys::ORDER_NUMBER, order_number)
            .with(keys::RATE, rate)
            .with_optional(keys::AMOUNT, amount);
        self.private_call(commands::MOVE_ORDER, Some(params)).await
    }

    /// Withdraws `amount` of `currency` to `address` (`withdraw`).
    pub async fn withdraw(&self, currency: &str, amount: Decimal, address: &str) -> Result<Value> {
        let params = Params::new()
            .with(keys::CURRENCY, currency)
            .with(keys::AMOUNT, amount)
            .with(keys::ADDRESS, address);
        self.private_call(commands::WITHDRAW, Some(params)).await
    }

    /// Margin position for a pair (`getMarginPosition`).
    pub async fn get_margin_position(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
    ) -> Result<Value> {
        self.private_call(
            commands::GET_MARGIN_POSITION,
            Some(pair_params(currency_a, currency_b)),
        )
        .await
    }

    /// Places a margin buy order (`marginBuy`).
    pub async fn margin_buy(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<Value> {
        self.private_call(
            commands::MARGIN_BUY,
            Some(order_params(currency_a, currency_b, rate, amount)),
        )
        .await
    }

    /// Places a margin sell order (`marginSell`).
    pub async fn margin_sell(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<Value> {
        self.private_call(
            commands::MARGIN_SELL,
            Some(order_params(currency_a, currency_b, rate, amount)),
        )
        .await
    }

    /// Closes the margin position for a pair at market (`closeMarginPosition`).
    pub async fn close_margin_position(
        &self,
        currency_a: &str,
        currency_b: Option<&str>,
    ) -> Result<Value> {
        self.private_call(
            commands::CLOSE_MARGIN_POSITION,
            Some(pair_params(currency_a, currency_b)),
        )
        .await
    }
}

fn order_params(currency_a: &str, currency_b: Option<&str>, rate: Decimal, amount: Decimal) -> Params {
    pair_params(currency_a, currency_b)
        .with(keys::RATE, rate)
        .with(keys::AMOUNT, amount)
}
