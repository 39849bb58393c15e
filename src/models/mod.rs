//! Data models for the Mondo API.
//!
//! - [`primitives`] - Identifier newtypes and [`Environment`]
//! - [`account`] - Accounts and token identity
//! - [`balance`] - Account balances
//! - [`transaction`] - Transactions and merchants
//! - [`feed`] - Feed items

pub mod primitives;
pub mod account;
pub mod balance;
pub mod transaction;
pub mod feed;

// Re-export commonly used types
pub use primitives::*;
pub use account::*;
pub use balance::*;
pub use transaction::*;
pub use feed::{FeedItem, FeedItemBuilder};
