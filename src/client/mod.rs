//! HTTP client and service layer for the Mondo API.
//!
//! This module provides the main entry point [`MondoClient`].
//!
//! # Example
//!
//! ```no_run
//! use mondo_rs::{ClientConfig, Environment, MondoClient};
//!
//! # async fn example() -> mondo_rs::Result<()> {
//! let client = MondoClient::with_config(
//!     "client-id",
//!     "client-secret",
//!     ClientConfig::default().with_environment(Environment::Staging),
//! )?;
//! client.authenticate("johndoe@example.com", "password").await?;
//!
//! let accounts = client.accounts().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::{MondoClient, Params, ACCESS_TOKEN_PARAM};
pub(crate) use http::{access_token_params, ClientInner};
