use thiserror::Error;

use crate::account::AccountId;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// No account is registered under this number.
    /// Replaces the `-1.0` deposit sentinel, the `0.0` withdraw sentinel
    /// and the missing-key failure of a balance read.
    #[error("account {0} does not exist")]
    AccountNotFound(AccountId),

    /// An account with this number was already created.
    #[error("account {0} already exists")]
    DuplicateAccount(AccountId),

    /// Amount is negative where it must not be, or is not finite.
    /// Replaces the `-1.0` withdraw sentinel.
    #[error("invalid amount {0}")]
    InvalidAmount(f64),

    /// Withdrawal of zero, or withdrawal from an empty account.
    /// Replaces the `-3.0` withdraw sentinel.
    #[error("cannot withdraw a zero amount or from a zero balance")]
    ZeroBalanceOrAmount,

    /// Withdrawal would empty or overdraw the account.
    /// Replaces the `-2.0` withdraw sentinel.
    #[error("withdrawal of {amount} is not below the balance of {balance}")]
    InsufficientFunds { balance: f64, amount: f64 },

    /// Operation record is missing data it needs.
    #[error("malformed operation: {0}")]
    Malformed(&'static str),
}
