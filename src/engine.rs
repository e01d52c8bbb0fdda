use crate::domain::{
    Account, AccountPolicy, Error, Operation, OperationKind, SharedAccount,
    traits::{AccountRepository, DeadLetterQueue, OperationStream},
};

use futures::StreamExt;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: AccountRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
    policy: AccountPolicy,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: AccountRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D, policy: AccountPolicy) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
            policy,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut ops = self.ingestion.stream();
        let (mut applied, mut failed) = (0usize, 0usize);

        while let Some(op) = ops.next().await {
            match op.and_then(|op| self.apply_operation(op)) {
                Ok(()) => applied += 1,
                Err(e) => {
                    failed += 1;
                    self.dlq.report(&e);
                }
            }
        }

        info!(applied, failed, "operations processed");
        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        debug!(%op, "applying");

        let result = match op.kind {
            OperationKind::Open { initial_balance } => {
                let account = Account::with_policy(op.holder.as_str(), initial_balance, self.policy)?;
                self.output_repository.open(account)?;
                return Ok(());
            }
            OperationKind::Deposit { amount } => self.account(&op.holder)?.deposit(amount),
            OperationKind::Withdraw { amount } => self.account(&op.holder)?.withdraw(amount),
            OperationKind::Transfer {
                amount,
                ref destination,
            } => {
                let source = self.account(&op.holder)?;
                let destination = self.account(destination)?;
                source.transfer(&destination, amount)
            }
            OperationKind::Close => self.account(&op.holder)?.close(),
            OperationKind::ResetDailyWithdrawal => {
                self.account(&op.holder)?.reset_daily_withdrawal();
                return Ok(());
            }
        };

        result.map_err(|reason| Error::Rejected {
            holder: op.holder,
            reason,
        })
    }

    fn account(&self, holder: &str) -> Result<SharedAccount, Error> {
        self.output_repository
            .get(holder)
            .ok_or_else(|| Error::Engine(format!("Unknown account holder: {}", holder)))
    }

    pub fn output_repository(&self) -> &O {
        &self.output_repository
    }

    pub fn dlq(&self) -> &D {
        &self.dlq
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.output_repository.flush()
    }
}
