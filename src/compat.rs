//! Sentinel-value interface over [`Ledger`].
//!
//! Older callers expect failures to come back as reserved return values
//! rather than errors. This module is the only place those values exist.
//!
//! |operation            |failure                          |returned         |
//! |---------------------|---------------------------------|-----------------|
//! |`create_account`     |any                              |`false`          |
//! |`deposit`            |any                              |`-1.0`           |
//! |`withdraw`           |account not found                |`0.0`            |
//! |`withdraw`           |negative amount                  |`-1.0`           |
//! |`withdraw`           |amount >= balance                |`-2.0`           |
//! |`withdraw`           |zero amount or zero balance      |`-3.0`           |
//! |`get_account_balance`|account not found                |`Err`            |

use crate::{
    account::AccountId,
    error::{LedgerError, Result},
    ledger::Ledger,
};

pub const DEPOSIT_FAILED: f64 = -1.0;
pub const WITHDRAW_ACCOUNT_NOT_FOUND: f64 = 0.0;
pub const WITHDRAW_INVALID_AMOUNT: f64 = -1.0;
pub const WITHDRAW_INSUFFICIENT_FUNDS: f64 = -2.0;
pub const WITHDRAW_ZERO_BALANCE_OR_AMOUNT: f64 = -3.0;

#[derive(Debug, Default, Clone)]
pub struct LegacyLedger {
    ledger: Ledger,
}

impl LegacyLedger {
    pub fn new() -> Self {
        LegacyLedger {
            ledger: Ledger::new(),
        }
    }

    pub fn create_account(&mut self, id: AccountId, initial_balance: f64) -> bool {
        self.ledger.create(id, initial_balance).is_ok()
    }

    pub fn deposit(&mut self, id: AccountId, amount: f64) -> f64 {
        deposit_sentinel(self.ledger.deposit(id, amount))
    }

    pub fn withdraw(&mut self, id: AccountId, amount: f64) -> f64 {
        withdraw_sentinel(self.ledger.withdraw(id, amount))
    }

    /// Missing accounts are reported as an error, there is no sentinel for reads.
    pub fn get_account_balance(&self, id: AccountId) -> Result<f64> {
        self.ledger.balance(id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

impl From<Ledger> for LegacyLedger {
    fn from(ledger: Ledger) -> Self {
        LegacyLedger { ledger }
    }
}

pub fn deposit_sentinel(result: Result<f64>) -> f64 {
    result.unwrap_or(DEPOSIT_FAILED)
}

pub fn withdraw_sentinel(result: Result<f64>) -> f64 {
    match result {
        Ok(balance) => balance,
        Err(LedgerError::AccountNotFound(_)) => WITHDRAW_ACCOUNT_NOT_FOUND,
        Err(LedgerError::InsufficientFunds { .. }) => WITHDRAW_INSUFFICIENT_FUNDS,
        Err(LedgerError::ZeroBalanceOrAmount) => WITHDRAW_ZERO_BALANCE_OR_AMOUNT,
        Err(_) => WITHDRAW_INVALID_AMOUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_account(id: AccountId, balance: f64) -> LegacyLedger {
        let mut ledger = LegacyLedger::new();
        assert!(ledger.create_account(id, balance));
        ledger
    }

    #[test]
    fn create_reports_success_as_bool() {
        let mut ledger = with_account(100, 100.0);

        assert!(!ledger.create_account(100, 20.0));
        assert!(!ledger.create_account(200, -1.5));
        assert_eq!(ledger.get_account_balance(100), Ok(100.0));
    }

    #[test]
    fn deposit_sentinels() {
        let mut ledger = with_account(10, 100.0);

        assert_eq!(ledger.deposit(12, 12.0), DEPOSIT_FAILED);
        assert_eq!(ledger.deposit(10, 50.5), 150.5);
    }

    #[test]
    fn withdraw_sentinels() {
        let mut ledger = with_account(15, 15.0);
        ledger.create_account(19, 0.0);

        assert_eq!(ledger.withdraw(30, 300.0), 0.0);
        assert_eq!(ledger.withdraw(15, -3.0), -1.0);
        assert_eq!(ledger.withdraw(15, 0.0), -3.0);
        assert_eq!(ledger.withdraw(19, 30.0), -3.0);
        assert_eq!(ledger.withdraw(15, 15.0), -2.0);
        assert_eq!(ledger.withdraw(15, 40.0), -2.0);
        assert_eq!(ledger.get_account_balance(15), Ok(15.0));

        assert_eq!(ledger.withdraw(15, 5.0), 10.0);
    }

    #[test]
    fn balance_of_missing_account_is_an_error() {
        let ledger = LegacyLedger::new();

        assert_eq!(
            ledger.get_account_balance(900),
            Err(LedgerError::AccountNotFound(900))
        );
    }

    #[test]
    fn wraps_an_existing_ledger() {
        let mut ledger = Ledger::new();
        ledger.create(5, 50.0).unwrap();

        let mut legacy = LegacyLedger::from(ledger);
        assert_eq!(legacy.withdraw(5, 20.0), 30.0);
        assert_eq!(legacy.ledger().balance(5), Ok(30.0));
    }

    #[test]
    fn balance_scenario() {
        let mut ledger = with_account(47, 356.0);

        let after_deposit = ledger.deposit(47, 570.8);
        let after_withdraw = ledger.withdraw(47, 238.7);

        assert!((after_deposit - 926.8).abs() < 1e-9);
        assert!((after_withdraw - 688.1).abs() < 1e-9);
        assert_eq!(ledger.get_account_balance(47), Ok(356.0 + 570.8 - 238.7));
    }
}
