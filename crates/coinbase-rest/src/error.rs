//! Error types for REST API operations

use crate::error_codes::RemoteErrorKind;
use rust_decimal::Decimal;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// An authenticated endpoint was called on a client without an API key
    #[error("Authentication required for this endpoint")]
    Unauthenticated,

    /// Quantity below the exchange's minimum, rejected before sending
    #[error("The minimum subtotal allowed is {minimum} BTC, got {qty} BTC")]
    MinimumSubtotal {
        /// Requested quantity
        qty: Decimal,
        /// Smallest quantity accepted
        minimum: Decimal,
    },

    /// The server reported a failure
    #[error("API error: {message}")]
    Remote {
        /// Classified error
        kind: RemoteErrorKind,
        /// Original error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request or response body could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx response without a JSON body
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),

    /// A wire value could not be converted
    #[error("Parse error: {0}")]
    Parse(String),

    /// The API key could not be loaded
    #[error("Auth error: {0}")]
    Auth(#[from] coinbase_auth::AuthError),

    /// Invalid client configuration or request parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// Create a remote error from a message returned by Coinbase
    pub fn remote(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Remote {
            kind: RemoteErrorKind::parse(&message),
            message,
        }
    }

    /// Create a remote error from the `errors` array of a response
    pub fn from_api_errors(errors: &[String]) -> Self {
        if errors.is_empty() {
            Self::remote("Unknown error")
        } else {
            Self::remote(errors.join(", "))
        }
    }

    /// Check if this error comes from the network or the wire format
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Json(_) | Self::UnexpectedStatus(..)
        )
    }

    /// Check if the server reported this error
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// The server's message, if this is a remote error
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
