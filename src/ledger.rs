use std::collections::HashMap;

use tracing::debug;

use crate::{
    account::{Account, AccountId},
    error::{LedgerError, Result},
};

/// In-memory set of accounts keyed by account number.
///
/// Every operation reports failure through [`LedgerError`]. Callers that
/// need the numeric sentinels of the older interface should go through
/// [`crate::compat::LegacyLedger`].
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
        }
    }

    /// Opens an account holding `initial_balance`.
    ///
    /// Fails if the number is taken or the balance is negative or not finite.
    /// Nothing is modified on failure.
    pub fn create(&mut self, id: AccountId, initial_balance: f64) -> Result<()> {
        if !initial_balance.is_finite() || initial_balance < 0.0 {
            debug!(account = id, initial_balance, "rejected account creation");
            return Err(LedgerError::InvalidAmount(initial_balance));
        }

        if self.accounts.contains_key(&id) {
            debug!(account = id, "account already exists");
            return Err(LedgerError::DuplicateAccount(id));
        }

        self.accounts.insert(id, Account::new(id, initial_balance));
        debug!(account = id, initial_balance, "account created");

        Ok(())
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// Negative amounts are accepted and lower the balance. A deposit that
    /// would take the balance out of the finite range is rejected.
    pub fn deposit(&mut self, id: AccountId, amount: f64) -> Result<f64> {
        let account = self.get_account_mut(id)?;

        let balance = account.balance + amount;
        if !balance.is_finite() {
            debug!(account = id, amount, "rejected deposit amount");
            return Err(LedgerError::InvalidAmount(amount));
        }

        account.balance = balance;
        debug!(account = id, amount, balance, "deposit");

        Ok(balance)
    }

    /// Subtracts `amount` from the balance and returns the new balance.
    ///
    /// The amount must be positive and strictly below the current balance.
    /// Checks run in this order, the first failing one wins:
    ///
    /// |condition                        |error                  |
    /// |---------------------------------|-----------------------|
    /// |no such account                  |`AccountNotFound`      |
    /// |amount negative or not finite    |`InvalidAmount`        |
    /// |balance is zero or amount is zero|`ZeroBalanceOrAmount`  |
    /// |amount >= balance                |`InsufficientFunds`    |
    pub fn withdraw(&mut self, id: AccountId, amount: f64) -> Result<f64> {
        let account = self.get_account_mut(id)?;

        if !amount.is_finite() || amount < 0.0 {
            debug!(account = id, amount, "rejected withdrawal amount");
            return Err(LedgerError::InvalidAmount(amount));
        }

        if account.balance == 0.0 || amount == 0.0 {
            debug!(account = id, amount, "zero withdrawal or zero balance");
            return Err(LedgerError::ZeroBalanceOrAmount);
        }

        if amount >= account.balance {
            debug!(account = id, amount, balance = account.balance, "insufficient funds");
            return Err(LedgerError::InsufficientFunds {
                balance: account.balance,
                amount,
            });
        }

        account.balance -= amount;
        debug!(account = id, amount, balance = account.balance, "withdrawal");

        Ok(account.balance)
    }

    pub fn balance(&self, id: AccountId) -> Result<f64> {
        self.accounts
            .get(&id)
            .map(|account| account.balance)
            .ok_or(LedgerError::AccountNotFound(id))
    }

    pub fn contains(&self, id: AccountId) -> bool {
        self.accounts.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts, ordered by account number.
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts = self.accounts.values().copied().collect::<Vec<_>>();
        accounts.sort_by_key(|account| account.account_id);
        accounts
    }

    fn get_account_mut(&mut self, id: AccountId) -> Result<&mut Account> {
        self.accounts.get_mut(&id).ok_or_else(|| {
            debug!(account = id, "account not found");
            LedgerError::AccountNotFound(id)
        })
    }
}
