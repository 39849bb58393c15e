//! # mondo-rs
//!
//! An async Rust client for the Mondo banking API.
//!
//! The client authenticates with the OAuth2 password grant, keeps one access
//! token, and exposes the account, balance, transaction and feed endpoints as
//! typed services.
//!
//! ## Features
//!
//! - **Authentication**: password grant, expiry checks and refresh-token exchange
//! - **Accounts & Balances**: list accounts and read their balances
//! - **Transactions**: list, fetch and annotate transactions with metadata
//! - **Feed**: post custom items to an account's feed
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mondo_rs::MondoClient;
//!
//! #[tokio::main]
//! async fn main() -> mondo_rs::Result<()> {
//!     let client = MondoClient::new("client-id", "client-secret")?;
//!     client.authenticate("johndoe@example.com", "password").await?;
//!
//!     let accounts = client.accounts().list().await?;
//!     println!("Found {} accounts", accounts.len());
//!
//!     if let Some(account) = accounts.first() {
//!         let balance = client.balances().get(&account.id).await?;
//!         println!("Balance: {} {}", balance.balance_major(), balance.currency);
//!
//!         for txn in client.transactions().list(&account.id).await? {
//!             println!("{} {}", txn.amount, txn.description);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Missing tokens and invalid arguments are reported before any request is
//! sent. Nothing is retried: a failed request surfaces exactly once as an
//! [`Error`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{AccountId, Environment, TransactionId};
pub use client::{ClientConfig, MondoClient};
pub use auth::Token;

/// Prelude module for convenient imports.
///
/// ```rust
/// use mondo_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AccountId, TransactionId, Environment,
        // Models
        Account, Balance, Transaction, Merchant, WhoAmI, FeedItem, FeedItemBuilder,
    };
    pub use crate::client::{MondoClient, ClientConfig};
    pub use crate::auth::Token;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_creation() {
        let account = AccountId::new("acc_00009237aqC8c5umZmrRdh");
        assert_eq!(account.as_str(), "acc_00009237aqC8c5umZmrRdh");
    }

    #[test]
    fn test_default_environment() {
        assert_eq!(
            ClientConfig::default().base_url,
            Environment::Production.api_base_url()
        );
    }
}
