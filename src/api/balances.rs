//! Balance service.

use std::sync::Arc;

use crate::api::Endpoint;
use crate::client::ClientInner;
use crate::models::{AccountId, Balance};
use crate::Result;

/// Service for balance lookups.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: mondo_rs::MondoClient) -> mondo_rs::Result<()> {
/// use mondo_rs::AccountId;
///
/// let account = AccountId::new("acc_00009237aqC8c5umZmrRdh");
/// let balance = client.balances().get(&account).await?;
/// println!("Balance: {} {}", balance.balance_major(), balance.currency);
/// # Ok(())
/// # }
/// ```
pub struct BalancesService {
    inner: Arc<ClientInner>,
}

impl BalancesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current balance of an account.
    ///
    /// The account id travels in the path template; the only parameter is
    /// the access token.
    pub async fn get(&self, account_id: &AccountId) -> Result<Balance> {
        let params = self.inner.token_params().await?;
        account_id.require("look up a balance")?;

        self.inner
            .get(&Endpoint::Balance { account_id }.path(), &params)
            .await
    }
}
