//! Balance models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current balance of an account.
///
/// All amounts are integers in the currency's minor unit (pennies for GBP).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Available balance
    pub balance: i64,
    /// Balance including pots, when the API reports it
    #[serde(default)]
    pub total_balance: Option<i64>,
    /// ISO 4217 currency code
    pub currency: String,
    /// Amount spent today, negative for outgoing money
    #[serde(default)]
    pub spend_today: i64,
}

impl Balance {
    /// Available balance in major units.
    ///
    /// Assumes a two-decimal currency such as GBP, which is all the API
    /// issues accounts in.
    pub fn balance_major(&self) -> Decimal {
        Decimal::new(self.balance, 2)
    }

    /// Today's spend in major units.
    pub fn spend_today_major(&self) -> Decimal {
        Decimal::new(self.spend_today, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balance_deserialize() {
        let json = serde_json::json!({
            "balance": 5000,
            "currency": "GBP",
            "spend_today": -1250
        });

        let balance: Balance = serde_json::from_value(json).unwrap();
        assert_eq!(balance.balance, 5000);
        assert_eq!(balance.currency, "GBP");
        assert!(balance.total_balance.is_none());
        assert_eq!(balance.balance_major(), dec!(50.00));
        assert_eq!(balance.spend_today_major(), dec!(-12.50));
    }
}
