//! API service modules for Mondo endpoints.
//!
//! Each service provides methods for one group of endpoints. All of them
//! need a token from [`MondoClient::authenticate`](crate::MondoClient::authenticate)
//! and fail with [`Error::NoToken`](crate::Error::NoToken) before sending
//! anything if there is none.

mod accounts;
mod balances;
mod endpoints;
mod feed;
mod ping;
mod transactions;

pub use accounts::AccountsService;
pub use balances::BalancesService;
pub use endpoints::Endpoint;
pub use feed::FeedService;
pub use ping::PingService;
pub use transactions::TransactionsService;
