//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{ApiKeyOnly, Balance, ReceiveAddress};
use reqwest::Method;
use tracing::instrument;

const BALANCE: &str = "account/balance";
const RECEIVE_ADDRESS: &str = "account/receive_address";

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get the account's BTC balance
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<Balance> {
        self.dispatcher
            .send_authenticated(ApiKeyOnly::default(), BALANCE, Method::GET)
            .await
    }

    /// Get the address the account receives bitcoin on
    #[instrument(skip(self))]
    pub async fn get_receive_address(&self) -> RestResult<ReceiveAddress> {
        self.dispatcher
            .send_authenticated(ApiKeyOnly::default(), RECEIVE_ADDRESS, Method::GET)
            .await
    }
}
