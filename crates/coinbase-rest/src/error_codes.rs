//! Classification of server-reported error messages
//!
//! Coinbase reports failures as free text, either in an `error` string or an
//! `errors` array. The messages below are the ones the API is known to send;
//! anything else is [`RemoteErrorKind::Other`].

/// Known kinds of server-reported errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteErrorKind {
    /// The API key was rejected
    InvalidApiKey,
    /// The server-side minimum purchase was not met
    MinimumSubtotal,
    /// A first purchase is still pending
    FirstPurchaseIncomplete,
    /// The site-wide daily purchase limit was reached
    DailyLimitReached,
    /// The requested object does not exist
    NotFound,
    /// Anything not recognised
    Other,
}

impl RemoteErrorKind {
    /// Classify a message returned by the API
    pub fn parse(message: &str) -> Self {
        let message = message.to_ascii_lowercase();

        if message.contains("api key") || message.contains("unauthorized") {
            Self::InvalidApiKey
        } else if message.contains("minimum subtotal") {
            Self::MinimumSubtotal
        } else if message.contains("first bitcoin purchase") {
            Self::FirstPurchaseIncomplete
        } else if message.contains("maximum number of purchases") {
            Self::DailyLimitReached
        } else if message.contains("not found") {
            Self::NotFound
        } else {
            Self::Other
        }
    }

    /// Whether the caller can fix this by changing its request or account
    pub fn requires_user_action(&self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey | Self::MinimumSubtotal | Self::FirstPurchaseIncomplete
        )
    }
}
