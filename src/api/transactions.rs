//! Transactions service for listing, fetching and annotating transactions.

use std::sync::Arc;

use crate::api::Endpoint;
use crate::client::{access_token_params, ClientInner, Params};
use crate::models::{AccountId, Transaction, TransactionId};
use crate::{Error, Result};

/// Service for transaction operations.
///
/// # Example
///
/// ```no_run
/// use mondo_rs::{AccountId, TransactionId};
///
/// # async fn example(client: mondo_rs::MondoClient) -> mondo_rs::Result<()> {
/// let account = AccountId::new("acc_00009237aqC8c5umZmrRdh");
///
/// let transactions = client.transactions().list(&account).await?;
/// for txn in &transactions {
///     println!("{}: {} {}", txn.id, txn.amount, txn.description);
/// }
///
/// // Tag a transaction
/// let txn = client
///     .transactions()
///     .annotate(&TransactionId::new("tx_00008zIcpb1TB4yeIFXMzx"), [("trip", "berlin")])
///     .await?;
/// println!("{:?}", txn.metadata);
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the transactions of an account.
    pub async fn list(&self, account_id: &AccountId) -> Result<Vec<Transaction>> {
        #[derive(serde::Deserialize)]
        struct Response {
            transactions: Vec<Transaction>,
        }

        let mut params = self.inner.token_params().await?;
        let account_id = account_id.require("list transactions")?;
        params.insert("account_id".to_string(), account_id.to_string());

        let response: Response = self
            .inner
            .get(&Endpoint::Transactions.path(), &params)
            .await?;
        Ok(response.transactions)
    }

    /// Get a single transaction by id.
    pub async fn get(&self, transaction_id: &TransactionId) -> Result<Transaction> {
        let params = self.inner.token_params().await?;
        transaction_id.require("look up a single transaction")?;

        let response: TransactionResponse = self
            .inner
            .get(&Endpoint::Transaction { transaction_id }.path(), &params)
            .await?;
        Ok(response.transaction)
    }

    /// Attach key-value metadata to a transaction.
    ///
    /// Each annotation `key` is sent as the form field `metadata[key]`.
    /// Sending an empty value removes that key on the server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the transaction id is empty or no
    /// annotations are given.
    pub async fn annotate<I, K, V>(
        &self,
        transaction_id: &TransactionId,
        annotations: I,
    ) -> Result<Transaction>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let token = self.inner.current_token().await?;
        transaction_id.require("annotate a transaction")?;

        let params = annotation_params(token.expose_access_token(), annotations)?;

        let response: TransactionResponse = self
            .inner
            .patch(&Endpoint::Transaction { transaction_id }.path(), &params)
            .await?;
        Ok(response.transaction)
    }
}

#[derive(serde::Deserialize)]
struct TransactionResponse {
    transaction: Transaction,
}

/// Build the PATCH form for an annotation: the access token plus one
/// `metadata[key]` field per annotation.
pub(crate) fn annotation_params<I, K, V>(access_token: &str, annotations: I) -> Result<Params>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut params = access_token_params(access_token);
    let mut count = 0usize;

    for (key, value) in annotations {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Annotation keys must not be empty".to_string(),
            ));
        }
        params.insert(format!("metadata[{}]", key), value.into());
        count += 1;
    }

    if count == 0 {
        return Err(Error::InvalidInput(
            "At least one annotation is required to annotate a transaction".to_string(),
        ));
    }
    Ok(params)
}
