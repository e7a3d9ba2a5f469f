//! Request dispatcher
//!
//! Every operation is one HTTP round trip in one of two shapes:
//!
//! - **Authenticated**: the API key is written into the payload, the payload
//!   is sent as a JSON body (also on GET, which the Coinbase v1 API expects)
//! - **Unauthenticated**: an optional payload is sent as a JSON GET body, or
//!   a bodyless GET is issued
//!
//! Both read the full response, reject failed status fields and then
//! deserialize the body into the caller's result type. Nothing is retried.

use crate::error::{RestError, RestResult};
use crate::types::ResponseStatus;
use coinbase_auth::{ApiKey, AuthenticatedRequest};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

/// Sends requests to one Coinbase API base URL
#[derive(Clone)]
pub struct Dispatcher {
    http_client: Client,
    base_url: String,
    api_key: Option<ApiKey>,
}

impl Dispatcher {
    /// `base_url` must end with `/`
    pub(crate) fn new(http_client: Client, base_url: String, api_key: Option<ApiKey>) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    /// Check if authenticated endpoints can be called
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Base URL all endpoints are relative to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Send an authenticated request
    ///
    /// Fails with [`RestError::Unauthenticated`] before any I/O when no API
    /// key is configured. The payload is consumed: the key only lives in it
    /// until the body is serialized.
    pub async fn send_authenticated<P, R>(
        &self,
        mut payload: P,
        endpoint: &str,
        method: Method,
    ) -> RestResult<R>
    where
        P: AuthenticatedRequest + Serialize,
        R: DeserializeOwned,
    {
        let api_key = self.api_key.as_ref().ok_or(RestError::Unauthenticated)?;

        payload.set_api_key(api_key);
        let body = serde_json::to_vec(&payload)?;
        drop(payload);

        debug!("Making authenticated {} request to {}", method, endpoint);

        let request = self
            .http_client
            .request(method, self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        self.execute(request, endpoint).await
    }

    /// Send an unauthenticated GET request, with a JSON body if a payload is given
    pub async fn send_unauthenticated<P, R>(
        &self,
        payload: Option<&P>,
        endpoint: &str,
    ) -> RestResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.http_client.get(self.url(endpoint));

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload)?;
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        debug!("Making unauthenticated GET request to {}", endpoint);

        self.execute(request, endpoint).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> RestResult<R> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        trace!(
            endpoint,
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&body),
            "Received response"
        );

        let value: Value = match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(_) if !status.is_success() => {
                return Err(RestError::UnexpectedStatus(
                    status.as_u16(),
                    String::from_utf8_lossy(&body).into_owned(),
                ))
            }
            Err(e) => return Err(e.into()),
        };

        if value.is_object() {
            ResponseStatus::deserialize(&value)?.into_result()?;
        }

        if !status.is_success() {
            return Err(RestError::UnexpectedStatus(status.as_u16(), value.to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
