//! Primitive types and newtypes for type-safe API interactions.
//!
//! Account and transaction identifiers are both plain strings on the wire
//! (`acc_...`, `tx_...`); wrapping them keeps them from being swapped at a
//! call site.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// A strongly-typed account identifier.
///
/// # Example
///
/// ```
/// use mondo_rs::AccountId;
///
/// let account = AccountId::new("acc_00009237aqC8c5umZmrRdh");
/// println!("Account: {}", account);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account id from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the account id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub(crate) fn require(&self, operation: &str) -> Result<&str> {
        if self.is_blank() {
            return Err(Error::InvalidInput(format!(
                "Account id is required to {}",
                operation
            )));
        }
        Ok(&self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A strongly-typed transaction identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new transaction id.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the transaction id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub(crate) fn require(&self, operation: &str) -> Result<&str> {
        if self.is_blank() {
            return Err(Error::InvalidInput(format!(
                "Transaction id is required to {}",
                operation
            )));
        }
        Ok(&self.0)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Environment configuration for the Mondo API.
///
/// # Example
///
/// ```
/// use mondo_rs::Environment;
///
/// let env = Environment::Staging;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment - real accounts with real money.
    #[default]
    Production,
    /// Staging environment for integration work.
    Staging,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://production-api.gmon.io",
            Environment::Staging => "https://staging-api.gmon.io",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Staging => write!(f, "staging"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id() {
        let account = AccountId::new("acc_123");
        assert_eq!(account.as_str(), "acc_123");
        assert_eq!(account.to_string(), "acc_123");
        assert!(account.require("look up a balance").is_ok());
    }

    #[test]
    fn test_blank_ids_are_rejected() {
        let err = AccountId::new("  ").require("look up a balance").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = TransactionId::from("").require("annotate").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://production-api.gmon.io"
        );
        assert_eq!(
            Environment::Staging.api_base_url(),
            "https://staging-api.gmon.io"
        );
        assert_eq!(Environment::default(), Environment::Production);
    }
}
