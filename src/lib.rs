//! In-memory account ledger: create accounts, deposit, withdraw and read balances.

pub mod account;
pub mod compat;
pub mod error;
pub mod ledger;
pub mod replay;
pub mod transaction;


pub use account::{Account, AccountId};
pub use compat::LegacyLedger;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use replay::{ReplayError, ReplaySummary};
pub use transaction::{Operation, OperationType, Outcome};
