//! API endpoint implementations

pub mod market;
pub mod account;
pub mod trading;
pub mod transactions;
pub mod users;

pub use market::MarketEndpoints;
pub use account::AccountEndpoints;
pub use trading::TradingEndpoints;
pub use transactions::TransactionEndpoints;
pub use users::UserEndpoints;
