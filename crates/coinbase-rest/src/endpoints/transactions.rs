//! Private transaction endpoints
//!
//! These endpoints require authentication.

use crate::dispatch::Dispatcher;
use crate::error::{RestError, RestResult};
use crate::types::{
    ApiKeyOnly, Transaction, TransactionEnvelope, TransactionList, TransactionListRequest,
};
use reqwest::Method;
use tracing::{debug, instrument};

const TRANSACTIONS: &str = "transactions";

/// Private transaction endpoints
pub struct TransactionEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> TransactionEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get a page of the account's transactions
    ///
    /// # Arguments
    /// * `page` - Page number. `None` or `Some(0)` requests the server's
    ///   default listing and sends no page at all.
    #[instrument(skip(self))]
    pub async fn get_transactions(&self, page: Option<u32>) -> RestResult<TransactionList> {
        let request = TransactionListRequest::for_page(page);

        let endpoint = match request.page {
            Some(page) => format!("{}?page={}", TRANSACTIONS, page),
            None => TRANSACTIONS.to_string(),
        };

        let list: TransactionList = self
            .dispatcher
            .send_authenticated(request, &endpoint, Method::GET)
            .await?;

        debug!(
            "Fetched {} transactions (page {} of {})",
            list.transactions.len(),
            list.current_page,
            list.num_pages
        );

        Ok(list)
    }

    /// Get a single transaction
    ///
    /// An error embedded next to the transaction is returned as a remote error.
    /// A missing API key is reported before the id is validated.
    #[instrument(skip(self))]
    pub async fn get_transaction(&self, id: &str) -> RestResult<Transaction> {
        if !self.dispatcher.has_api_key() {
            return Err(RestError::Unauthenticated);
        }
        if id.trim().is_empty() {
            return Err(RestError::InvalidParameter(
                "transaction id must not be empty".to_string(),
            ));
        }

        let endpoint = format!("{}/{}", TRANSACTIONS, urlencoding::encode(id));

        let envelope: TransactionEnvelope = self
            .dispatcher
            .send_authenticated(ApiKeyOnly::default(), &endpoint, Method::GET)
            .await?;

        envelope.into_result()
    }
}
