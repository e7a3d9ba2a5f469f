//! The API key and the capability to attach it to a request body
//!
//! # Security
//!
//! The key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose()`

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{AuthError, AuthResult};

/// Environment variable read by [`ApiKey::from_env`]
pub const API_KEY_ENV_VAR: &str = "CB_API_KEY";

/// Coinbase API key
///
/// An `ApiKey` is never empty: an empty key means "not authenticated" and is
/// rejected at construction, so holding an `ApiKey` is proof that
/// authenticated calls may be attempted.
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Create a new API key
    ///
    /// The key is sent exactly as given, so an empty key or one with
    /// surrounding whitespace is rejected rather than rewritten.
    pub fn new(key: impl AsRef<str>) -> AuthResult<Self> {
        let key = key.as_ref();
        if key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials(
                "API key must not be empty".to_string(),
            ));
        }
        if key.trim() != key {
            return Err(AuthError::InvalidCredentials(
                "API key must not have surrounding whitespace".to_string(),
            ));
        }

        Ok(Self {
            key: SecretString::from(key.to_string()),
        })
    }

    /// Load the API key from `CB_API_KEY`
    pub fn from_env() -> AuthResult<Self> {
        Self::from_env_var(API_KEY_ENV_VAR)
    }

    /// Load the API key from an arbitrary environment variable
    ///
    /// A variable that is set but empty counts as not set.
    pub fn from_env_var(name: &str) -> AuthResult<Self> {
        let value = std::env::var(name).map_err(|_| AuthError::EnvVarNotSet(name.to_string()))?;
        if value.trim().is_empty() {
            return Err(AuthError::EnvVarNotSet(name.to_string()));
        }

        debug!("Loaded API key from {}", name);
        Self::new(value)
    }

    /// Get the raw key
    ///
    /// Only meant for writing the key into an outgoing request body.
    pub fn expose(&self) -> &str {
        self.key.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self {
            key: SecretString::from(self.key.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("key", &"[REDACTED]").finish()
    }
}

/// A request body that carries the API key
///
/// Implemented by every payload sent to an authenticated endpoint. The
/// dispatcher calls [`set_api_key`](Self::set_api_key) immediately before
/// serializing the payload and drops the payload once the body is built.
pub trait AuthenticatedRequest {
    /// Write the API key into the payload
    fn set_api_key(&mut self, api_key: &ApiKey);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, serde::Serialize)]
    struct OrderBody {
        qty: u32,
        api_key: String,
    }

    impl AuthenticatedRequest for OrderBody {
        fn set_api_key(&mut self, api_key: &ApiKey) {
            self.api_key = api_key.expose().to_string();
        }
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            ApiKey::new(""),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            ApiKey::new("   "),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert!(matches!(
            ApiKey::new("  abc123\n"),
            Err(AuthError::InvalidCredentials(msg)) if msg.contains("whitespace")
        ));
        assert!(matches!(
            ApiKey::new("abc123 "),
            Err(AuthError::InvalidCredentials(_))
        ));

        let key = ApiKey::new("abc 123").unwrap();
        assert_eq!(key.expose(), "abc 123");
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = ApiKey::new("super_secret_key").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("super_secret_key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_clone_keeps_key() {
        let key = ApiKey::new("abc123").unwrap();
        assert_eq!(key.clone().expose(), "abc123");
    }

    #[test]
    fn test_missing_env_var() {
        let result = ApiKey::from_env_var("COINBASE_AUTH_TEST_UNSET_VARIABLE");
        assert!(matches!(result, Err(AuthError::EnvVarNotSet(name)) if name == "COINBASE_AUTH_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn test_set_api_key_reaches_body() {
        let key = ApiKey::new("abc123").unwrap();
        let mut body = OrderBody { qty: 1, ..Default::default() };
        body.set_api_key(&key);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["api_key"], "abc123");
        assert_eq!(json["qty"], 1);
    }
}
