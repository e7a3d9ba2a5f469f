//! Main REST client implementation

use crate::dispatch::Dispatcher;
use crate::endpoints::{
    AccountEndpoints, MarketEndpoints, TradingEndpoints, TransactionEndpoints, UserEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::types::{
    Balance, Currencies, ExchangeRates, ReceiveAddress, Transaction, TransactionList, Transfer,
    User,
};
use coinbase_auth::ApiKey;
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://coinbase.com/api/v1/";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("coinbase-rest/", env!("CARGO_PKG_VERSION"));

/// Coinbase REST API client
///
/// Provides access to both public and private endpoints. The API key is held
/// by the client, so separate clients can use separate keys.
///
/// # Example
///
/// ```no_run
/// use coinbase_rest::CoinbaseClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CoinbaseClient::new()?;
///     let rates = client.get_exchange_rates(&["btc_to_usd"]).await?;
///
///     // With the API key from CB_API_KEY for private endpoints
///     let auth_client = CoinbaseClient::from_env()?;
///     let balance = auth_client.get_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinbaseClient {
    dispatcher: Dispatcher,
}

impl CoinbaseClient {
    /// Create a new client without an API key
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with an API key
    pub fn with_api_key(api_key: ApiKey) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_api_key(api_key))
    }

    /// Create a new client with the API key from `CB_API_KEY`
    pub fn from_env() -> RestResult<Self> {
        Self::with_api_key(ApiKey::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        info!(
            base_url = %base_url,
            authenticated = config.api_key.is_some(),
            "Created Coinbase REST client"
        );

        Ok(Self {
            dispatcher: Dispatcher::new(http_client, base_url, config.api_key),
        })
    }

    /// Check if the client has an API key for private endpoints
    pub fn has_api_key(&self) -> bool {
        self.dispatcher.has_api_key()
    }

    /// The underlying request dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.dispatcher)
    }

    /// Get supported currencies (ISO code to name)
    pub async fn get_currencies(&self) -> RestResult<Currencies> {
        self.market().get_currencies().await
    }

    /// Get exchange rates for the given pairs (e.g. "btc_to_usd")
    pub async fn get_exchange_rates(&self, pairs: &[&str]) -> RestResult<ExchangeRates> {
        self.market().get_exchange_rates(pairs).await
    }

    /// Get the total cost of buying `qty` BTC
    pub async fn get_buy_price(&self, qty: Decimal) -> RestResult<Balance> {
        self.market().get_buy_price(qty).await
    }

    /// Get the total return of selling `qty` BTC
    pub async fn get_sell_price(&self, qty: Decimal) -> RestResult<Balance> {
        self.market().get_sell_price(qty).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires an API key)
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.dispatcher)
    }

    /// Get account balance
    pub async fn get_balance(&self) -> RestResult<Balance> {
        self.account().get_balance().await
    }

    /// Get the account's bitcoin receive address
    pub async fn get_receive_address(&self) -> RestResult<ReceiveAddress> {
        self.account().get_receive_address().await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires an API key)
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.dispatcher)
    }

    /// Buy `qty` BTC
    pub async fn buy_btc(&self, qty: Decimal) -> RestResult<Transfer> {
        self.trading().buy_btc(qty).await
    }

    /// Sell `qty` BTC
    pub async fn sell_btc(&self, qty: Decimal) -> RestResult<Transfer> {
        self.trading().sell_btc(qty).await
    }

    // ========================================================================
    // Private Transaction and User Endpoints
    // ========================================================================

    /// Get transaction endpoints (requires an API key)
    pub fn transactions(&self) -> TransactionEndpoints<'_> {
        TransactionEndpoints::new(&self.dispatcher)
    }

    /// Get a page of transactions; `None` or `Some(0)` for the default listing
    pub async fn get_transactions(&self, page: Option<u32>) -> RestResult<TransactionList> {
        self.transactions().get_transactions(page).await
    }

    /// Get a single transaction
    pub async fn get_transaction(&self, id: &str) -> RestResult<Transaction> {
        self.transactions().get_transaction(id).await
    }

    /// Get user endpoints (requires an API key)
    pub fn users(&self) -> UserEndpoints<'_> {
        UserEndpoints::new(&self.dispatcher)
    }

    /// Get the current user
    pub async fn get_user(&self) -> RestResult<User> {
        self.users().get_user().await
    }
}

impl std::fmt::Debug for CoinbaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseClient")
            .field("base_url", &self.dispatcher.base_url())
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}

/// Validate a base URL and make sure it ends with `/`
fn normalize_base_url(base_url: &str) -> RestResult<String> {
    let base_url = base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(RestError::InvalidParameter(format!(
            "base URL must start with http:// or https://: {:?}",
            base_url
        )));
    }

    if base_url.ends_with('/') {
        Ok(base_url.to_string())
    } else {
        Ok(format!("{}/", base_url))
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key (optional)
    pub api_key: Option<ApiKey>,
    /// Base URL all endpoints are relative to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
