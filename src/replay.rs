use std::io;

use thiserror::Error;
use tracing::warn;

use crate::{error::LedgerError, ledger::Ledger, transaction::Operation};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to parse operation {row}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// Row parsed but is missing data it needs, e.g. a deposit without an amount.
    #[error("failed to apply operation {row}")]
    Malformed {
        row: usize,
        #[source]
        source: LedgerError,
    },

    #[error("failed to write output")]
    Write(#[from] csv::Error),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Counts of what happened during a replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Replays a `type,account,amount` CSV against `ledger`.
///
/// Rejected operations are logged and replay continues; a malformed row
/// stops it. With `outcomes` set, one [`crate::transaction::Outcome`] row is
/// written per operation, otherwise the final balances are written once the
/// input is exhausted.
pub fn replay<R, W>(
    input: R,
    output: W,
    ledger: &mut Ledger,
    outcomes: bool,
) -> Result<ReplaySummary, ReplayError>
where
    R: io::Read,
    W: io::Write,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All) // input may contain space padding
        .from_reader(input);
    let mut wtr = csv::WriterBuilder::new().from_writer(output);
    let mut summary = ReplaySummary::default();

    for (index, operation) in rdr.deserialize::<Operation>().enumerate() {
        let row = index + 1;
        let operation = operation.map_err(|source| ReplayError::Parse { row, source })?;

        let applied = operation.apply_to(ledger);
        match &applied {
            Ok(_) => summary.applied += 1,
            Err(LedgerError::Malformed(reason)) => {
                return Err(ReplayError::Malformed {
                    row,
                    source: LedgerError::Malformed(*reason),
                });
            }
            Err(err) => {
                warn!(row, account = operation.account_id, %err, "operation rejected");
                summary.rejected += 1;
            }
        }

        if outcomes {
            let outcome = operation
                .render(applied)
                .map_err(|source| ReplayError::Malformed { row, source })?;
            wtr.serialize(outcome)?;
        }
    }

    if !outcomes {
        for account in ledger.accounts() {
            wtr.serialize(account)?;
        }
    }

    wtr.flush()?;

    Ok(summary)
}
