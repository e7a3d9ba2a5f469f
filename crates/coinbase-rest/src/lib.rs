//! REST API client for the Coinbase v1 API
//!
//! This crate provides a typed client for Coinbase's v1 REST API: market
//! data, account information, buying and selling bitcoin, and the
//! transaction history.
//!
//! # Features
//!
//! - **Market Data**: Currencies, exchange rates, buy/sell price quotes
//! - **Account**: Balance, receive address, current user
//! - **Trading**: Buy and sell bitcoin
//! - **Transactions**: Paged history, single transaction lookup
//!
//! # Authentication
//!
//! Private endpoints require an API key. The v1 API expects the key inside
//! the JSON request body, on GET requests as well; the client attaches it to
//! each request right before sending. Calling a private endpoint on a client
//! without a key fails with [`RestError::Unauthenticated`] and sends nothing.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_rest::{ApiKey, CoinbaseClient};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CoinbaseClient::new()?;
//!     let quote = client.get_buy_price(dec!(0.5)).await?;
//!     println!("0.5 BTC costs {} {}", quote.amount, quote.currency);
//!
//!     // Private endpoints (auth required)
//!     let auth_client = CoinbaseClient::with_api_key(ApiKey::from_env()?)?;
//!     let balance = auth_client.get_balance().await?;
//!     println!("Balance: {} {}", balance.amount, balance.currency);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`RestResult`]. Nothing is retried: network and
//! JSON failures, failures reported by the server, and local validation
//! failures all reach the caller as a [`RestError`].

pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod error_codes;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, CoinbaseClient, DEFAULT_BASE_URL};
pub use coinbase_auth::{ApiKey, AuthenticatedRequest};
pub use dispatch::Dispatcher;
pub use error::{RestError, RestResult};
pub use error_codes::RemoteErrorKind;

// Re-export endpoint-specific types
pub use types::{
    // Market data
    Balance, Currencies, ExchangeRates,
    // Account
    ReceiveAddress, User, UserOverview,
    // Transactions
    Transaction, TransactionList,
    // Trading
    Fee, Transfer, MINIMUM_QUANTITY,
};
