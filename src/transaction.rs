use serde::{Deserialize, Serialize};

use crate::{
    account::AccountId,
    compat,
    error::{LedgerError, Result},
    ledger::Ledger,
};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OperationType {
    /// A create opens a new account with an initial balance.
    /// The account number must not be in use and the
    /// balance must not be negative.
    ///
    /// A create looks like
    ///
    /// |type       |account |amount |
    /// |-----------|--------|-------|
    /// |create     |1       |100.0  |
    Create,

    /// A deposit increases the balance of an existing account
    /// by the amount given.
    ///
    /// A deposit looks like
    ///
    /// |type       |account |amount |
    /// |-----------|--------|-------|
    /// |deposit    |1       |1.0    |
    Deposit,

    /// A withdraw decreases the balance of an existing account.
    /// The amount must be positive and strictly below the
    /// current balance, so an account can never be emptied
    /// by a withdrawal.
    ///
    /// A withdrawal looks like
    ///
    /// |type       |account |amount |
    /// |-----------|--------|-------|
    /// |withdraw   |1       |1.0    |
    Withdraw,

    /// A balance reads the current balance of an account.
    /// It carries no amount.
    ///
    /// A balance looks like
    ///
    /// |type       |account |amount |
    /// |-----------|--------|-------|
    /// |balance    |1       |       |
    Balance,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Operation {
    /// Type of operation. See `OperationType` for more information.
    #[serde(rename = "type")]
    pub op_type: OperationType,

    /// Account number.
    #[serde(rename = "account")]
    pub account_id: AccountId,

    /// Required for everything but `balance`.
    pub amount: Option<f64>,
}

/// Result of applying one operation, rendered the way sentinel-style
/// callers read it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Outcome {
    #[serde(rename = "type")]
    pub op_type: OperationType,

    #[serde(rename = "account")]
    pub account_id: AccountId,

    pub amount: Option<f64>,

    /// `true`/`false` for creates, the balance or sentinel for deposits
    /// and withdrawals, the balance or an empty field for reads.
    pub result: String,
}

impl Operation {
    pub fn new(op_type: OperationType, account_id: AccountId, amount: Option<f64>) -> Self {
        Operation {
            op_type,
            account_id,
            amount,
        }
    }

    fn get_amount(&self) -> Result<f64> {
        self.amount
            .ok_or(LedgerError::Malformed("operation requires an amount"))
    }

    /// Applies the operation to the ledger.
    /// Returns the balance after the operation, except for creates
    /// which return the initial balance.
    pub fn apply_to(&self, ledger: &mut Ledger) -> Result<f64> {
        match self.op_type {
            OperationType::Create => {
                let amount = self.get_amount()?;
                ledger.create(self.account_id, amount)?;
                Ok(amount)
            }
            OperationType::Deposit => ledger.deposit(self.account_id, self.get_amount()?),
            OperationType::Withdraw => ledger.withdraw(self.account_id, self.get_amount()?),
            OperationType::Balance => ledger.balance(self.account_id),
        }
    }

    /// Applies the operation and renders the result as an [`Outcome`].
    ///
    /// Malformed records are still reported as errors since they have no
    /// sentinel.
    pub fn outcome(&self, ledger: &mut Ledger) -> Result<Outcome> {
        self.render(self.apply_to(ledger))
    }

    /// Renders the result of [`Operation::apply_to`] as an [`Outcome`].
    pub fn render(&self, applied: Result<f64>) -> Result<Outcome> {
        if let Err(LedgerError::Malformed(reason)) = applied {
            return Err(LedgerError::Malformed(reason));
        }

        let result = match self.op_type {
            OperationType::Create => applied.is_ok().to_string(),
            OperationType::Deposit => compat::deposit_sentinel(applied).to_string(),
            OperationType::Withdraw => compat::withdraw_sentinel(applied).to_string(),
            OperationType::Balance => applied.map(|b| b.to_string()).unwrap_or_default(),
        };

        Ok(Outcome {
            op_type: self.op_type,
            account_id: self.account_id,
            amount: self.amount,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_without_amount_are_malformed() {
        let mut ledger = Ledger::new();

        for op_type in [
            OperationType::Create,
            OperationType::Deposit,
            OperationType::Withdraw,
        ] {
            let op = Operation::new(op_type, 1, None);
            assert!(matches!(
                op.apply_to(&mut ledger),
                Err(LedgerError::Malformed(_))
            ));
            assert!(op.outcome(&mut ledger).is_err());
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn balance_ignores_amount() {
        let mut ledger = Ledger::new();
        ledger.create(3, 9.0).unwrap();

        let op = Operation::new(OperationType::Balance, 3, Some(1234.0));
        assert_eq!(op.apply_to(&mut ledger), Ok(9.0));
    }

    #[test]
    fn outcomes_render_sentinels() {
        let mut ledger = Ledger::new();
        let render = |ledger: &mut Ledger, op_type, id, amount| {
            Operation::new(op_type, id, amount)
                .outcome(ledger)
                .unwrap()
                .result
        };

        assert_eq!(render(&mut ledger, OperationType::Create, 1, Some(10.0)), "true");
        assert_eq!(render(&mut ledger, OperationType::Create, 1, Some(10.0)), "false");
        assert_eq!(render(&mut ledger, OperationType::Deposit, 2, Some(1.0)), "-1");
        assert_eq!(render(&mut ledger, OperationType::Withdraw, 2, Some(1.0)), "0");
        assert_eq!(render(&mut ledger, OperationType::Withdraw, 1, Some(0.0)), "-3");
        assert_eq!(render(&mut ledger, OperationType::Withdraw, 1, Some(10.0)), "-2");
        assert_eq!(render(&mut ledger, OperationType::Withdraw, 1, Some(2.5)), "7.5");
        assert_eq!(render(&mut ledger, OperationType::Balance, 1, None), "7.5");
        assert_eq!(render(&mut ledger, OperationType::Balance, 2, None), "");
    }
}
