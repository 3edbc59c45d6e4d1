use serde::{Deserialize, Serialize};

/// Account number. Any `i32` is a valid identifier.
pub type AccountId = i32;

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub struct Account {
    /// Account number.
    #[serde(rename = "account")]
    pub account_id: AccountId,

    /// Using an `f64` here is not advised but done for simplicity.
    /// Balances should be stored with fixed precision to
    /// ensure correct and precise arithmetic operations.
    pub balance: f64,
}

impl Account {
    pub fn new(id: AccountId, balance: f64) -> Self {
        Account {
            account_id: id,
            balance,
        }
    }
}
