//! Account and identity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::AccountId;

/// A Mondo account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account id
    pub id: AccountId,
    /// Account description, usually the holder's name
    pub description: String,
    /// When the account was created
    pub created: DateTime<Utc>,
    /// UK account number, once one has been issued
    #[serde(default)]
    pub account_number: Option<String>,
    /// UK sort code, once one has been issued
    #[serde(default)]
    pub sort_code: Option<String>,
    /// Account type (e.g. "uk_prepaid", "uk_retail")
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
}

/// Identity of the current access token, as reported by `/ping/whoami`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmI {
    /// Whether the token is currently accepted
    pub authenticated: bool,
    /// OAuth2 client the token was issued to
    #[serde(default)]
    pub client_id: Option<String>,
    /// User the token acts for
    #[serde(default)]
    pub user_id: Option<String>,
}
