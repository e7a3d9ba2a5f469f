//! Private trading endpoints
//!
//! Buying and selling bitcoin. Quantities below [`MINIMUM_QUANTITY`] are
//! rejected locally without calling the API.

use crate::dispatch::Dispatcher;
use crate::error::{RestError, RestResult};
use crate::types::{QuantityRequest, Transfer, TransferResult, MINIMUM_QUANTITY};
use reqwest::Method;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

const BUYS: &str = "buys";
const SELLS: &str = "sells";

/// Private trading endpoints
pub struct TradingEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Buy a quantity of BTC
    #[instrument(skip(self))]
    pub async fn buy_btc(&self, qty: Decimal) -> RestResult<Transfer> {
        self.transfer(qty, BUYS).await
    }

    /// Sell a quantity of BTC
    #[instrument(skip(self))]
    pub async fn sell_btc(&self, qty: Decimal) -> RestResult<Transfer> {
        self.transfer(qty, SELLS).await
    }

    async fn transfer(&self, qty: Decimal, endpoint: &str) -> RestResult<Transfer> {
        check_minimum(qty)?;

        let result: TransferResult = self
            .dispatcher
            .send_authenticated(QuantityRequest::new(qty), endpoint, Method::POST)
            .await?;

        let transfer = result.into_result()?;
        debug!("Transfer {} created with status {}", transfer.code, transfer.status);

        Ok(transfer)
    }
}

fn check_minimum(qty: Decimal) -> RestResult<()> {
    if qty < MINIMUM_QUANTITY {
        return Err(RestError::MinimumSubtotal {
            qty,
            minimum: MINIMUM_QUANTITY,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimum_quantity() {
        assert!(check_minimum(dec!(0.10)).is_ok());
        assert!(check_minimum(dec!(1)).is_ok());

        for qty in [dec!(0.09999), dec!(0), dec!(-1)] {
            assert!(matches!(
                check_minimum(qty),
                Err(RestError::MinimumSubtotal { minimum, .. }) if minimum == dec!(0.10)
            ));
        }
    }
}
