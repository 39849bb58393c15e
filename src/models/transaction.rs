//! Transaction and merchant models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::primitives::{AccountId, TransactionId};

/// A single card payment, top-up or transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction id
    pub id: TransactionId,
    /// When the transaction was created
    pub created: DateTime<Utc>,
    /// Raw description from the card network
    pub description: String,
    /// Amount in minor units, negative for debits
    pub amount: i64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Merchant, either as a bare id or expanded
    #[serde(default)]
    pub merchant: Option<Merchant>,
    /// Free-form notes attached by the user
    #[serde(default)]
    pub notes: String,
    /// Key-value annotations
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Account balance after this transaction
    #[serde(default)]
    pub account_balance: Option<i64>,
    /// Account the transaction belongs to
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Spending category (e.g. "eating_out")
    #[serde(default)]
    pub category: Option<String>,
    /// Whether this is a top-up
    #[serde(default)]
    pub is_load: bool,
    /// Settlement time; absent while the transaction is pending
    #[serde(default, deserialize_with = "settled_at")]
    pub settled: Option<DateTime<Utc>>,
    /// Reason a declined transaction was refused
    #[serde(default)]
    pub decline_reason: Option<String>,
    /// Amount in the local currency for foreign transactions
    #[serde(default)]
    pub local_amount: Option<i64>,
    /// Local currency for foreign transactions
    #[serde(default)]
    pub local_currency: Option<String>,
}

impl Transaction {
    /// Returns `true` if the card network refused the payment.
    pub fn is_declined(&self) -> bool {
        self.decline_reason.is_some()
    }
}

/// Merchant reference on a transaction.
///
/// The API returns a bare id unless the merchant was expanded in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Merchant {
    /// Merchant id only
    Id(String),
    /// Full merchant record
    Expanded(Box<MerchantDetails>),
}

impl Merchant {
    /// The merchant id, whichever form was returned.
    pub fn id(&self) -> &str {
        match self {
            Merchant::Id(id) => id,
            Merchant::Expanded(details) => &details.id,
        }
    }
}

/// Expanded merchant record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantDetails {
    /// Merchant id
    pub id: String,
    /// Display name
    pub name: String,
    /// Logo URL
    #[serde(default)]
    pub logo: Option<String>,
    /// Emoji the app shows for this merchant
    #[serde(default)]
    pub emoji: Option<String>,
    /// Merchant category
    #[serde(default)]
    pub category: Option<String>,
    /// Merchant group shared across branches
    #[serde(default)]
    pub group_id: Option<String>,
    /// Physical address
    #[serde(default)]
    pub address: Option<Address>,
}

/// Merchant address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// Region or county
    #[serde(default)]
    pub region: Option<String>,
    /// ISO country code
    #[serde(default)]
    pub country: Option<String>,
    /// Postcode
    #[serde(default)]
    pub postcode: Option<String>,
    /// Latitude
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude
    #[serde(default)]
    pub longitude: Option<f64>,
}

// Older responses send `true`/`false` or an empty string for pending
// transactions instead of omitting the field.
fn settled_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Settled {
        Flag(bool),
        Text(String),
    }

    match Option::<Settled>::deserialize(deserializer)? {
        None | Some(Settled::Flag(_)) => Ok(None),
        Some(Settled::Text(s)) if s.is_empty() => Ok(None),
        Some(Settled::Text(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "account_balance": 13013,
            "amount": -510,
            "created": "2015-08-22T12:20:18Z",
            "currency": "GBP",
            "description": "THE DE BEAUVOIR DELI C LONDON        GBR",
            "id": "tx_00008zIcpb1TB4yeIFXMzx",
            "merchant": "merch_00008zIcpbAKe8shBxXUtl",
            "metadata": {},
            "notes": "Salmon sandwich",
            "is_load": false,
            "settled": "2015-08-23T12:20:18Z",
            "category": "eating_out"
        })
    }

    #[test]
    fn test_transaction_deserialize() {
        let txn: Transaction = serde_json::from_value(sample()).unwrap();
        assert_eq!(txn.id.as_str(), "tx_00008zIcpb1TB4yeIFXMzx");
        assert_eq!(txn.amount, -510);
        assert_eq!(
            txn.merchant.as_ref().map(Merchant::id),
            Some("merch_00008zIcpbAKe8shBxXUtl")
        );
        assert!(txn.settled.is_some());
        assert!(!txn.is_declined());
    }

    #[test]
    fn test_expanded_merchant() {
        let mut json = sample();
        json["merchant"] = serde_json::json!({
            "id": "merch_00008zIcpbAKe8shBxXUtl",
            "name": "The De Beauvoir Deli Co.",
            "category": "eating_out",
            "address": { "city": "London", "country": "GB" }
        });

        let txn: Transaction = serde_json::from_value(json).unwrap();
        match txn.merchant {
            Some(Merchant::Expanded(details)) => {
                assert_eq!(details.name, "The De Beauvoir Deli Co.");
                assert_eq!(
                    details.address.and_then(|a| a.city).as_deref(),
                    Some("London")
                );
            }
            other => panic!("Expected expanded merchant, got {:?}", other),
        }
    }

    #[test]
    fn test_pending_settlement_forms() {
        for settled in [serde_json::json!(""), serde_json::json!(true)] {
            let mut json = sample();
            json["settled"] = settled;
            let txn: Transaction = serde_json::from_value(json).unwrap();
            assert!(txn.settled.is_none());
        }

        let mut json = sample();
        json.as_object_mut().unwrap().remove("settled");
        let txn: Transaction = serde_json::from_value(json).unwrap();
        assert!(txn.settled.is_none());
    }
}
