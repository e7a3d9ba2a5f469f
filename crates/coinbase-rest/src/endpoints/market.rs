//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::dispatch::Dispatcher;
use crate::error::{RestError, RestResult};
use crate::types::{Balance, Currencies, ExchangeRates, PriceQuery};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

const CURRENCIES: &str = "currencies";
const EXCHANGE_RATES: &str = "currencies/exchange_rates";
const BUY_PRICE: &str = "prices/buy";
const SELL_PRICE: &str = "prices/sell";

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get supported currencies
    ///
    /// The API answers with `[code, name, ...]` entries; the first two
    /// elements are folded into a map from code to name.
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Currencies> {
        let entries: Vec<Vec<String>> = self
            .dispatcher
            .send_unauthenticated(None::<&()>, CURRENCIES)
            .await?;

        debug!("Fetched {} currencies", entries.len());

        entries.into_iter().map(currency_entry).collect()
    }

    /// Get exchange rates for the requested pairs
    ///
    /// # Arguments
    /// * `pairs` - Pair keys such as "btc_to_usd". Pairs the server doesn't
    ///   know are left out of the result.
    #[instrument(skip(self))]
    pub async fn get_exchange_rates(&self, pairs: &[&str]) -> RestResult<ExchangeRates> {
        let mut rates = self.get_all_exchange_rates().await?;
        rates.retain_pairs(pairs);
        Ok(rates)
    }

    /// Get the full exchange rate table
    #[instrument(skip(self))]
    pub async fn get_all_exchange_rates(&self) -> RestResult<ExchangeRates> {
        let rates: ExchangeRates = self
            .dispatcher
            .send_unauthenticated(None::<&()>, EXCHANGE_RATES)
            .await?;

        debug!("Fetched {} exchange rates", rates.len());

        Ok(rates)
    }

    /// Get the total cost of buying a quantity of BTC, fees and market depth included
    #[instrument(skip(self))]
    pub async fn get_buy_price(&self, qty: Decimal) -> RestResult<Balance> {
        self.dispatcher
            .send_unauthenticated(Some(&PriceQuery { qty }), BUY_PRICE)
            .await
    }

    /// Get the total return of selling a quantity of BTC, fees and market depth included
    #[instrument(skip(self))]
    pub async fn get_sell_price(&self, qty: Decimal) -> RestResult<Balance> {
        self.dispatcher
            .send_unauthenticated(Some(&PriceQuery { qty }), SELL_PRICE)
            .await
    }
}

/// Split a `[code, name, ...]` entry, ignoring trailing elements
fn currency_entry(entry: Vec<String>) -> RestResult<(String, String)> {
    let mut fields = entry.into_iter();
    match (fields.next(), fields.next()) {
        (Some(code), Some(name)) => Ok((code, name)),
        (code, _) => Err(RestError::Parse(format!(
            "currency entry {:?} has no name",
            code.unwrap_or_default()
        ))),
    }
}
