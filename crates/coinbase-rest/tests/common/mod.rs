//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes of the Coinbase v1 API.

#![allow(dead_code)]

use coinbase_rest::{ApiKey, ClientConfig, CoinbaseClient};
use mockito::{Matcher, Mock, ServerGuard};

/// Key used by authenticated test clients
pub const API_KEY: &str = "test-api-key-0123456789";

pub const CURRENCIES_RESPONSE: &str = r#"[
    ["USD", "US Dollar"],
    ["BTC", "Bitcoin"]
]"#;

pub const EXCHANGE_RATES_RESPONSE: &str = r#"{
    "btc_to_usd": "100",
    "usd_to_btc": "0.01",
    "eur_to_usd": "1.1"
}"#;

pub const BALANCE_RESPONSE: &str = r#"{
    "amount": "36.62800000",
    "currency": "BTC"
}"#;

pub const PRICE_RESPONSE: &str = r#"{
    "amount": "63.31",
    "currency": "USD"
}"#;

pub const RECEIVE_ADDRESS_RESPONSE: &str = r#"{
    "success": true,
    "address": "muVu2JZo8PbewBHRp6bpqFvVD87qvqEHWA",
    "callback_url": null
}"#;

pub const TRANSFER_RESPONSE: &str = r#"{
    "success": true,
    "errors": [],
    "transfer": {
        "_type": "AchDebit",
        "code": "6H7GYLXZ",
        "created_at": "2013-01-28T16:08:58-08:00",
        "fees": {
            "coinbase": {"cents": 14, "currency_iso": "USD"},
            "bank": {"cents": 15, "currency_iso": "USD"}
        },
        "status": "created",
        "payout_date": "2013-02-01T18:00:00-08:00",
        "btc": {"amount": "0.50000000", "currency": "BTC"},
        "subtotal": {"amount": "13.55", "currency": "USD"},
        "total": {"amount": "13.84", "currency": "USD"}
    }
}"#;

pub const TRANSFER_REJECTED_RESPONSE: &str = r#"{
    "success": false,
    "errors": ["Please wait until your first bitcoin purchase completes before making additional purchases"]
}"#;

pub const TRANSACTION_RESPONSE: &str = r#"{
    "transaction": {
        "id": "abc",
        "created_at": "2013-03-23T17:43:35-07:00",
        "amount": {"amount": "-1.10000000", "currency": "BTC"},
        "request": false,
        "status": "pending",
        "sender": {"id": "u1", "email": "user1@example.com", "name": "User One"},
        "recipient": {"id": "u2", "email": "user2@example.com", "name": "User Two"}
    },
    "success": true,
    "error": ""
}"#;

pub const TRANSACTION_NOT_FOUND_RESPONSE: &str = r#"{
    "transaction": {},
    "success": false,
    "error": "not found"
}"#;

pub const TRANSACTIONS_RESPONSE: &str = r#"{
    "current_user": {"id": "u1", "email": "user1@example.com", "name": "User One"},
    "balance": {"amount": "0.00000000", "currency": "BTC"},
    "total_count": 2,
    "num_pages": 1,
    "current_page": 1,
    "transactions": [
        {"transaction": {"id": "t1", "status": "complete", "amount": {"amount": "1.00", "currency": "BTC"}}},
        {"transaction": {"id": "t2", "status": "pending", "amount": {"amount": "-0.50", "currency": "BTC"}}}
    ]
}"#;

pub const USERS_RESPONSE: &str = r#"{
    "users": [
        {
            "user": {
                "id": "512db383f8182bd24d000001",
                "name": "User One",
                "email": "user1@example.com",
                "time_zone": "Pacific Time (US & Canada)",
                "native_currency": "USD",
                "balance": {"amount": "49.76000000", "currency": "BTC"},
                "buy_level": 1,
                "sell_level": 1,
                "buy_limit": {"amount": "10.00000000", "currency": "BTC"},
                "sell_limit": {"amount": "100.00000000", "currency": "BTC"}
            }
        }
    ]
}"#;

/// Client for the mock server without an API key
pub fn public_client(server: &ServerGuard) -> CoinbaseClient {
    CoinbaseClient::with_config(ClientConfig::new().with_base_url(server.url()))
        .expect("Failed to create client")
}

/// Client for the mock server with [`API_KEY`]
pub fn authenticated_client(server: &ServerGuard) -> CoinbaseClient {
    let api_key = ApiKey::new(API_KEY).expect("Invalid test key");
    CoinbaseClient::with_config(
        ClientConfig::new()
            .with_base_url(server.url())
            .with_api_key(api_key),
    )
    .expect("Failed to create client")
}

/// Mocks that fail the test on assert if any request reaches the server
pub async fn forbid_requests(server: &mut ServerGuard) -> Vec<Mock> {
    let mut mocks = Vec::new();
    for method in ["GET", "POST"] {
        mocks.push(
            server
                .mock(method, Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }
    mocks
}

pub async fn assert_no_requests(mocks: &[Mock]) {
    for mock in mocks {
        mock.assert_async().await;
    }
}
