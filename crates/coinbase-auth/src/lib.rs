//! API key handling for the Coinbase REST API
//!
//! Coinbase's v1 API authenticates a request by carrying the account's API
//! key inside the JSON request body. This crate owns the key itself and the
//! capability every authenticated request body shares: having the key
//! attached to it right before it is serialized.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_auth::ApiKey;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads CB_API_KEY
//!     let key = ApiKey::from_env()?;
//!     println!("{:?}", key); // the key itself is never printed
//!     Ok(())
//! }
//! ```

mod api_key;
mod error;

pub use api_key::{ApiKey, AuthenticatedRequest, API_KEY_ENV_VAR};
pub use error::{AuthError, AuthResult};
