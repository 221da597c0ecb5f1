//! Endpoint method tests against a recording transport.
//!
//! Each method must hit the right path with the right wire command and
//! parameters. No network is involved.

use async_trait::async_trait;
use poloniex_client::poloniex::Poloniex;
use poloniex_core::codec::Params;
use poloniex_core::error::Result;
use poloniex_core::transport::{HttpMethod, RequestEnvelope, Transport};
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct RecordingTransport {
    sent: Mutex<Vec<RequestEnvelope>>,
}

impl RecordingTransport {
    fn last(&self) -> RequestEnvelope {
        self.sent.lock().unwrap().last().cloned().unwrap()
    }

    fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, envelope: RequestEnvelope) -> Result<Value> {
        self.sent.lock().unwrap().push(envelope);
        Ok(json!({"success": 1}))
    }
}

fn client(transport: &Arc<RecordingTransport>) -> Poloniex {
    Poloniex::builder()
        .api_key("test-key")
        .secret("test-secret")
        .transport(transport.clone())
        .build()
        .unwrap()
}

fn anonymous(transport: &Arc<RecordingTransport>) -> Poloniex {
    Poloniex::builder().transport(transport.clone()).build().unwrap()
}

/// Parameters minus the nonce, in key order.
fn without_nonce(params: &Params) -> String {
    params
        .iter()
        .filter(|(k, _)| *k != "nonce")
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn assert_public(envelope: &RequestEnvelope, expected_query: &str) {
    assert_eq!(envelope.method, HttpMethod::Get);
    assert_eq!(envelope.url, "https://poloniex.com/public");
    assert_eq!(envelope.query_string(), expected_query);
    assert!(envelope.headers.is_empty());
}

fn assert_private(envelope: &RequestEnvelope, expected: &str) {
    assert_eq!(envelope.method, HttpMethod::Post);
    assert_eq!(envelope.url, "https://poloniex.com/tradingApi");
    assert_eq!(without_nonce(&envelope.params), expected);
    assert!(envelope.params.contains_key("nonce"));
    assert!(envelope.body().contains("&nonce="));
    assert_eq!(envelope.headers.get("Key").unwrap(), "test-key");
    assert_eq!(envelope.headers.get("Sign").unwrap().len(), 128);
}

// ==================== Public ====================

#[tokio::test]
async fn test_fetch_ticker() {
    let transport = Arc::new(RecordingTransport::default());
    anonymous(&transport).fetch_ticker().await.unwrap();
    assert_public(&transport.last(), "command=returnTicker");
}

#[tokio::test]
async fn test_fetch_24h_volume() {
    let transport = Arc::new(RecordingTransport::default());
    anonymous(&transport).fetch_24h_volume().await.unwrap();
    assert_public(&transport.last(), "command=return24hVolume");
}

#[tokio::test]
async fn test_fetch_order_book() {
    let transport = Arc::new(RecordingTransport::default());
    let poloniex = anonymous(&transport);

    poloniex.fetch_order_book("BTC", Some("ETH")).await.unwrap();
    assert_public(&transport.last(), "command=returnOrderBook&currencyPair=BTC_ETH");

    poloniex.fetch_order_book("all", None).await.unwrap();
    assert_public(&transport.last(), "command=returnOrderBook&currencyPair=all");
}

#[tokio::test]
async fn test_fetch_trade_history() {
    let transport = Arc::new(RecordingTransport::default());
    anonymous(&transport)
        .fetch_trade_history("USDT", Some("BTC"))
        .await
        .unwrap();
    assert_public(
        &transport.last(),
        "command=returnTradeHistory&currencyPair=USDT_BTC",
    );
}

#[tokio::test]
async fn test_public_calls_work_with_credentials() {
    let transport = Arc::new(RecordingTransport::default());
    client(&transport).fetch_ticker().await.unwrap();
    assert_public(&transport.last(), "command=returnTicker");
}

// ==================== Private ====================

#[tokio::test]
async fn test_my_balances() {
    let transport = Arc::new(RecordingTransport::default());
    client(&transport).my_balances().await.unwrap();
    assert_private(&transport.last(), "command=returnBalances");
}

#[tokio::test]
async fn test_my_open_orders() {
    let transport = Arc::new(RecordingTransport::default());
    client(&transport).my_open_orders("BTC", Some("ETH")).await.unwrap();
    assert_private(
        &transport.last(),
        "command=returnOpenOrders&currencyPair=BTC_ETH",
    );
}

#[tokio::test]
async fn test_all_my_open_orders() {
    let transport = Arc::new(RecordingTransport::default());
    client(&transport).all_my_open_orders().await.unwrap();
    assert_private(&transport.last(), "command=allMyOpenOrders&currencyPair=all");
}

#[tokio::test]
async fn test_my_trade_history() {
    let transport = Arc::new(RecordingTransport::default());
    client(&transport).my_trade_history("BTC", Some("XMR")).await.unwrap();
    assert_private(
        &transport.last(),
        "command=returnTradeHistory&currencyPair=BTC_XMR",
    );
}

#[tokio::test]
async fn test_buy_and_sell() {
    let transport = Arc::new(RecordingTransport::default());
    let poloniex = client(&transport);

    poloniex
        .buy("BTC", Some("ETH"), dec!(1.0), dec!(2.0))
        .await
        .unwrap();
    assert_private(
        &transport.last(),
        "amount=2.0&command=buy&currencyPair=BTC_ETH&rate=1.0",
    );

    poloniex
        .sell("BTC", Some("ETH"), dec!(0.035), dec!(10))
        .await
        .unwrap();
    assert_private(
        &transport.last(),
        "amount=10&command=sell&currencyPair=BTC_ETH&rate=0.035",
    );
}

#[tokio::test]
async fn test_cancel_order() {
    let transport = Arc::new(RecordingTransport::default());
    client(&transport)
        .cancel_order("BTC", Some("ETH"), "120466")
        .await
        .unwrap();
    assert_private(
        &transport.last(),
        "command=cancelOrder&currencyPair=BTC_ETH&orderNumber=120466",
    );
}

#[tokio::test]
async fn test_move_order_with_and_without_amount() {
    let transport = Arc::new(RecordingTransport::default());
    let poloniex = client(&transport);

    poloniex
        .move_order("120466", dec!(0.0051), Some(dec!(3)))
        .await
        .unwrap();
    assert_private(
        &transport.last(),
        "amount=3&command=moveOrder&orderNumber=120466&rate=0.0051",
    );

    poloniex.move_order("120466", dec!(0.0051), None).await.unwrap();
    let envelope = transport.last();
    assert_private(&envelope, "command=moveOrder&orderNumber=120466&rate=0.0051");
    assert!(!envelope.params.contains_key("amount"));
}

#[tokio::test]
async fn test_withdraw() {
    let transport = Arc::new(RecordingTransport::default());
    client(&transport)
        .withdraw("BTC", dec!(0.5), "1BoatSLRHtKNngkdXEeobR76b53LETtpyT")
        .await
        .unwrap();
    assert_private(
        &transport.last(),
        "address=1BoatSLRHtKNngkdXEeobR76b53LETtpyT&amount=0.5&command=withdraw&currency=BTC",
    );
}

#[tokio::test]
async fn test_margin_operations() {
    let transport = Arc::new(RecordingTransport::default());
    let poloniex = client(&transport);

    poloniex.get_margin_position("BTC", Some("ETH")).await.unwrap();
    assert_private(
        &transport.last(),
        "command=getMarginPosition&currencyPair=BTC_ETH",
    );

    poloniex
        .margin_buy("BTC", Some("ETH"), dec!(0.02), dec!(1))
        .await
        .unwrap();
    assert_private(
        &transport.last(),
        "amount=1&command=marginBuy&currencyPair=BTC_ETH&rate=0.02",
    );

    poloniex
        .margin_sell("BTC", Some("ETH"), dec!(0.03), dec!(1))
        .await
        .unwrap();
    assert_private(
        &transport.last(),
        "amount=1&command=marginSell&currencyPair=BTC_ETH&rate=0.03",
    );

    poloniex.close_margin_position("BTC", Some("ETH")).await.unwrap();
    assert_private(
        &transport.last(),
        "command=closeMarginPosition&currencyPair=BTC_ETH",
    );
}

#[tokio::test]
async fn test_every_private_method_requires_credentials() {
    let transport = Arc::new(RecordingTransport::default());
    let poloniex = anonymous(&transport);

    let results = vec![
        poloniex.my_balances().await,
        poloniex.my_open_orders("BTC", Some("ETH")).await,
        poloniex.all_my_open_orders().await,
        poloniex.my_trade_history("BTC", Some("ETH")).await,
        poloniex.buy("BTC", Some("ETH"), dec!(1), dec!(1)).await,
        poloniex.sell("BTC", Some("ETH"), dec!(1), dec!(1)).await,
        poloniex.cancel_order("BTC", Some("ETH"), "1").await,
        poloniex.move_order("1", dec!(1), None).await,
        poloniex.withdraw("BTC", dec!(1), "addr").await,
        poloniex.get_margin_position("BTC", Some("ETH")).await,
        poloniex.margin_buy("BTC", Some("ETH"), dec!(1), dec!(1)).await,
        poloniex.margin_sell("BTC", Some("ETH"), dec!(1), dec!(1)).await,
        poloniex.close_margin_position("BTC", Some("ETH")).await,
    ];

    assert_eq!(results.len(), 13);
    for result in results {
        assert!(result.unwrap_err().is_credentials_missing());
    }
    assert_eq!(transport.count(), 0);
}

#[tokio::test]
async fn test_clones_share_nonce_sequence() {
    let transport = Arc::new(RecordingTransport::default());
    let poloniex = client(&transport);
    let clone = poloniex.clone();

    poloniex.my_balances().await.unwrap();
    clone.my_balances().await.unwrap();

    let sent = transport.sent.lock().unwrap();
    let nonce = |i: usize| -> u64 {
        sent[i].params.get("nonce").unwrap().to_string().parse().unwrap()
    };
    assert!(nonce(1) > nonce(0));
}
