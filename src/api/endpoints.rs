//! Endpoint path templates.

use std::fmt;

use crate::models::{AccountId, TransactionId};

/// A Mondo REST endpoint.
///
/// Ids are substituted verbatim; the same id always renders the same path.
///
/// ```
/// use mondo_rs::api::Endpoint;
/// use mondo_rs::AccountId;
///
/// let account_id = AccountId::new("acc_123");
/// let path = Endpoint::Balance { account_id: &account_id }.path();
/// assert_eq!(path, "/balance?account_id=acc_123");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// OAuth2 token endpoint
    Token,
    /// Token introspection
    Ping,
    /// Account list
    Accounts,
    /// Balance of one account
    Balance {
        /// Account to look up
        account_id: &'a AccountId,
    },
    /// Transaction list
    Transactions,
    /// A single transaction
    Transaction {
        /// Transaction to look up or annotate
        transaction_id: &'a TransactionId,
    },
    /// Feed items
    Feed,
}

impl Endpoint<'_> {
    /// Render the path, relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Token => "/oauth2/token".to_string(),
            Endpoint::Ping => "/ping/whoami".to_string(),
            Endpoint::Accounts => "/accounts".to_string(),
            Endpoint::Balance { account_id } => format!("/balance?account_id={}", account_id),
            Endpoint::Transactions => "/transactions".to_string(),
            Endpoint::Transaction { transaction_id } => {
                format!("/transactions/{}", transaction_id)
            }
            Endpoint::Feed => "/feed".to_string(),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_paths() {
        assert_eq!(Endpoint::Token.path(), "/oauth2/token");
        assert_eq!(Endpoint::Ping.path(), "/ping/whoami");
        assert_eq!(Endpoint::Accounts.path(), "/accounts");
        assert_eq!(Endpoint::Transactions.path(), "/transactions");
        assert_eq!(Endpoint::Feed.path(), "/feed");
    }

    #[test]
    fn test_templated_paths_are_deterministic() {
        let account_id = AccountId::new("acc_00009237aqC8c5umZmrRdh");
        let transaction_id = TransactionId::new("tx_00008zIcpb1TB4yeIFXMzx");

        let balance = Endpoint::Balance { account_id: &account_id };
        assert_eq!(balance.path(), "/balance?account_id=acc_00009237aqC8c5umZmrRdh");
        assert_eq!(balance.path(), balance.path());

        let transaction = Endpoint::Transaction { transaction_id: &transaction_id };
        assert_eq!(transaction.path(), "/transactions/tx_00008zIcpb1TB4yeIFXMzx");
        assert_eq!(transaction.to_string(), transaction.path());
    }
}
