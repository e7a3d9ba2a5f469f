//! Types for Coinbase REST API requests and responses
//!
//! Each endpoint's response keeps its own shape: some bodies carry the data
//! at the top level, the buy/sell result reports an `errors` array, and the
//! transaction and user endpoints nest the real object one level deeper with
//! an `error` string next to it.

use crate::error::{RestError, RestResult};
use chrono::{DateTime, FixedOffset};
use coinbase_auth::{ApiKey, AuthenticatedRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Smallest quantity of BTC that may be bought or sold
pub const MINIMUM_QUANTITY: Decimal = dec!(0.10);

// ============================================================================
// Response Status
// ============================================================================

/// Status fields found at the top level of most response bodies
///
/// Only the status is read here; the data itself is deserialized into the
/// endpoint's own response type.
#[derive(Debug, Default, Deserialize)]
pub struct ResponseStatus {
    /// `false` when the request failed
    #[serde(default)]
    pub success: Option<bool>,
    /// Single error message
    #[serde(default)]
    pub error: Option<String>,
    /// Error messages (buy/sell endpoints)
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl ResponseStatus {
    /// Turn a failed status into a remote error
    pub fn into_result(self) -> RestResult<()> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(RestError::from_api_errors(&errors));
        }
        if let Some(error) = self.error.filter(|error| !error.is_empty()) {
            return Err(RestError::remote(error));
        }
        if self.success == Some(false) {
            return Err(RestError::remote("Request was not successful"));
        }
        Ok(())
    }
}

// ============================================================================
// Money
// ============================================================================

/// An amount of money in a currency
///
/// The amount stays a decimal string as sent on the wire; use
/// [`numeric`](Self::numeric) to get a value for arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Decimal amount, e.g. "36.62800000"
    #[serde(default)]
    pub amount: String,
    /// Currency code, e.g. "BTC"
    #[serde(default, alias = "currency_iso")]
    pub currency: String,
}

impl Balance {
    /// Parse the amount
    pub fn numeric(&self) -> RestResult<Decimal> {
        let amount = self.amount.trim();
        amount
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(amount))
            .map_err(|e| RestError::Parse(format!("invalid amount {:?}: {}", self.amount, e)))
    }
}

/// A fee charged on a transfer, in cents of its currency
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fee {
    /// Fee in minor units
    #[serde(default)]
    pub cents: i64,
    /// Currency code
    #[serde(default)]
    pub currency_iso: String,
}

impl Fee {
    /// Fee in major units
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.cents, 2)
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Supported currencies, ISO code to name
pub type Currencies = HashMap<String, String>;

/// Exchange rates keyed by currency pair, e.g. "btc_to_usd"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRates(HashMap<String, String>);

impl ExchangeRates {
    /// Key used by the API for a currency pair
    pub fn pair_key(from: &str, to: &str) -> String {
        format!(
            "{}_to_{}",
            from.to_ascii_lowercase(),
            to.to_ascii_lowercase()
        )
    }

    /// Raw rate for a pair key
    pub fn get(&self, pair: &str) -> Option<&str> {
        self.0.get(pair).map(String::as_str)
    }

    /// Parsed rate from one currency to another
    pub fn rate(&self, from: &str, to: &str) -> Option<Decimal> {
        self.get(&Self::pair_key(from, to))?.parse().ok()
    }

    /// Keep only the requested pairs; unknown pairs are ignored
    pub fn retain_pairs(&mut self, pairs: &[&str]) {
        self.0.retain(|pair, _| pairs.contains(&pair.as_str()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl From<HashMap<String, String>> for ExchangeRates {
    fn from(rates: HashMap<String, String>) -> Self {
        Self(rates)
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Address the account receives bitcoin on
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReceiveAddress {
    /// Bitcoin address
    pub address: String,
    /// URL notified when coins arrive
    #[serde(default)]
    pub callback_url: Option<String>,
}

/// Short description of a user, as embedded in other objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserOverview {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// The authenticated user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub time_zone: String,
    pub native_currency: String,
    pub balance: Balance,
    pub buy_level: u32,
    pub sell_level: u32,
    pub buy_limit: Balance,
    pub sell_limit: Balance,
}

/// One entry of the `users` response
#[derive(Debug, Default, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body of the `users` endpoint
#[derive(Debug, Default, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub users: Vec<UserEnvelope>,
}

impl UsersEnvelope {
    /// The current user, or the error embedded next to it
    pub fn into_user(self) -> RestResult<User> {
        let entry = self
            .users
            .into_iter()
            .next()
            .ok_or_else(|| RestError::remote("No user returned"))?;

        match entry.error {
            Some(error) if !error.is_empty() => Err(RestError::remote(error)),
            _ => Ok(entry.user),
        }
    }
}

// ============================================================================
// Transaction Types
// ============================================================================

/// A transaction on the account
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: String,
    pub created_at: Option<String>,
    pub amount: Balance,
    /// Whether this is a money request rather than a transfer
    pub request: bool,
    pub status: String,
    pub sender: Option<UserOverview>,
    pub recipient: Option<UserOverview>,
    pub notes: Option<String>,
}

impl Transaction {
    /// Creation time, if present and valid RFC 3339
    pub fn created_at_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.created_at.as_deref()?).ok()
    }
}

/// Response body of the single-transaction endpoint
#[derive(Debug, Default, Deserialize)]
pub struct TransactionEnvelope {
    #[serde(default)]
    pub transaction: Transaction,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TransactionEnvelope {
    /// The transaction, or the error embedded next to it
    pub fn into_result(self) -> RestResult<Transaction> {
        if let Some(error) = self.error.filter(|error| !error.is_empty()) {
            return Err(RestError::remote(error));
        }
        if self.success == Some(false) {
            return Err(RestError::remote("Transaction lookup failed"));
        }
        Ok(self.transaction)
    }
}

/// A page of the account's transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionList {
    pub current_user: UserOverview,
    pub balance: Balance,
    pub total_count: u64,
    pub num_pages: u32,
    pub current_page: u32,
    #[serde(deserialize_with = "listed_transactions")]
    pub transactions: Vec<Transaction>,
}

/// List entries come either bare or wrapped as `{"transaction": {...}}`
#[derive(Deserialize)]
#[serde(untagged)]
enum ListedTransaction {
    Wrapped { transaction: Transaction },
    Bare(Transaction),
}

fn listed_transactions<'de, D>(deserializer: D) -> Result<Vec<Transaction>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries: Option<Vec<ListedTransaction>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            ListedTransaction::Wrapped { transaction } | ListedTransaction::Bare(transaction) => {
                transaction
            }
        })
        .collect())
}

// ============================================================================
// Trading Types
// ============================================================================

/// A purchase or sale of bitcoin
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Transfer {
    #[serde(rename = "_type")]
    pub transfer_type: String,
    pub code: String,
    pub created_at: Option<String>,
    pub fees: HashMap<String, Fee>,
    pub status: String,
    pub payout_date: Option<String>,
    pub btc: Balance,
    pub subtotal: Balance,
    pub total: Balance,
}

impl Transfer {
    /// Sum of all fees in the given currency
    pub fn total_fees(&self, currency: &str) -> Decimal {
        self.fees
            .values()
            .filter(|fee| fee.currency_iso.eq_ignore_ascii_case(currency))
            .map(Fee::amount)
            .sum()
    }
}

/// Response body of the buy and sell endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TransferResult {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub transfer: Option<Transfer>,
}

impl TransferResult {
    /// The transfer, or the errors reported instead
    pub fn into_result(self) -> RestResult<Transfer> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(RestError::from_api_errors(&errors));
        }
        if self.success == Some(false) {
            return Err(RestError::remote("Transfer was not successful"));
        }
        self.transfer
            .ok_or_else(|| RestError::Parse("response has no transfer".to_string()))
    }
}

// ============================================================================
// Request Payloads
// ============================================================================

/// Body of an authenticated request that has no parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyOnly {
    #[serde(default)]
    pub api_key: String,
}

impl AuthenticatedRequest for ApiKeyOnly {
    fn set_api_key(&mut self, api_key: &ApiKey) {
        self.api_key = api_key.expose().to_string();
    }
}

/// Body of a buy or sell request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRequest {
    /// Quantity of BTC
    #[serde(with = "rust_decimal::serde::float")]
    pub qty: Decimal,
    #[serde(default)]
    pub api_key: String,
}

impl QuantityRequest {
    pub fn new(qty: Decimal) -> Self {
        Self {
            qty,
            api_key: String::new(),
        }
    }
}

impl AuthenticatedRequest for QuantityRequest {
    fn set_api_key(&mut self, api_key: &ApiKey) {
        self.api_key = api_key.expose().to_string();
    }
}

/// Body of a transaction list request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionListRequest {
    /// Page to load; absent for the server's default listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default)]
    pub api_key: String,
}

impl TransactionListRequest {
    /// Request for a page; `None` and `Some(0)` both mean the default listing
    pub fn for_page(page: Option<u32>) -> Self {
        Self {
            page: page.filter(|page| *page > 0),
            api_key: String::new(),
        }
    }
}

impl AuthenticatedRequest for TransactionListRequest {
    fn set_api_key(&mut self, api_key: &ApiKey) {
        self.api_key = api_key.expose().to_string();
    }
}

/// Body of a price quote request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuery {
    #[serde(with = "rust_decimal::serde::float")]
    pub qty: Decimal,
}
