//! Endpoint methods, one per wire command.
//!
//! Methods return the response JSON as-is. An API-level failure arrives as a
//! successful `{"error": "..."}` body and is not turned into an `Err`.

mod private;
mod public;

/// Wire command names.
pub mod commands {
    /// All tickers.
    pub const RETURN_TICKER: &str = "returnTicker";
    /// 24h volume per market.
    pub const RETURN_24H_VOLUME: &str = "return24hVolume";
    /// Order book for a pair.
    pub const RETURN_ORDER_BOOK: &str = "returnOrderBook";
    /// Trade history (public: market trades; private: own trades).
    pub const RETURN_TRADE_HISTORY: &str = "returnTradeHistory";
    /// Account balances.
    pub const RETURN_BALANCES: &str = "returnBalances";
    /// Own open orders for a pair.
    pub const RETURN_OPEN_ORDERS: &str = "returnOpenOrders";
    /// Own open orders across all pairs.
    pub const ALL_MY_OPEN_ORDERS: &str = "allMyOpenOrders";
    /// Limit buy.
    pub const BUY: &str = "buy";
    /// Limit sell.
    pub const SELL: &str = "sell";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "cancelOrder";
    /// Re-price an order.
    pub const MOVE_ORDER: &str = "moveOrder";
    /// Withdraw funds.
    pub const WITHDRAW: &str = "withdraw";
    /// Margin position for a pair.
    pub const GET_MARGIN_POSITION: &str = "getMarginPosition";
    /// Margin buy.
    pub const MARGIN_BUY: &str = "marginBuy";
    /// Margin sell.
    pub const MARGIN_SELL: &str = "marginSell";
    /// Close a margin position.
    pub const CLOSE_MARGIN_POSITION: &str = "closeMarginPosition";
}

/// Parameter names.
pub(crate) mod keys {
    pub const CURRENCY_PAIR: &str = "currencyPair";
    pub const CURRENCY: &str = "currency";
    pub const RATE: &str = "rate";
    pub const AMOUNT: &str = "amount";
    pub const ORDER_NUMBER: &str = "orderNumber";
    pub const ADDRESS: &str = "address";
}
