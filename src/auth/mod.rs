//! Authentication and token management for the Mondo API.
//!
//! Mondo issues tokens through the OAuth2 password grant. The client keeps
//! exactly one [`Token`] and replaces it on every successful
//! `authenticate` or `refresh`.
//!
//! ```no_run
//! use mondo_rs::MondoClient;
//!
//! # async fn example() -> mondo_rs::Result<()> {
//! let client = MondoClient::new("client-id", "client-secret")?;
//! let token = client.authenticate("johndoe@example.com", "password").await?;
//! println!("Token for {:?} expires at {:?}", token.user_id(), token.expires_at());
//!
//! if client.is_expired().await? {
//!     client.refresh().await?;
//! }
//! # Ok(())
//! # }
//! ```

mod provider;
mod token;

pub use token::Token;
pub(crate) use provider::OAuthProvider;
