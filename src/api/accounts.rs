//! Accounts service.

use std::sync::Arc;

use crate::api::Endpoint;
use crate::client::ClientInner;
use crate::models::Account;
use crate::Result;

/// Service for account operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: mondo_rs::MondoClient) -> mondo_rs::Result<()> {
/// let accounts = client.accounts().list().await?;
/// for account in accounts {
///     println!("Account: {} ({})", account.id, account.description);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the accounts the authenticated user owns.
    pub async fn list(&self) -> Result<Vec<Account>> {
        #[derive(serde::Deserialize)]
        struct Response {
            accounts: Vec<Account>,
        }

        let params = self.inner.token_params().await?;
        let response: Response = self
            .inner
            .get(&Endpoint::Accounts.path(), &params)
            .await?;
        Ok(response.accounts)
    }
}
