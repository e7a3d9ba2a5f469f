//! Private user endpoints

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{ApiKeyOnly, User, UsersEnvelope};
use reqwest::Method;
use tracing::instrument;

const USERS: &str = "users";

/// Private user endpoints
pub struct UserEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> UserEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get the user the API key belongs to
    #[instrument(skip(self))]
    pub async fn get_user(&self) -> RestResult<User> {
        let envelope: UsersEnvelope = self
            .dispatcher
            .send_authenticated(ApiKeyOnly::default(), USERS, Method::GET)
            .await?;

        envelope.into_user()
    }
}
