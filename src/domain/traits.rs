use futures::Stream;
use rust_decimal::Decimal;

use crate::domain::{Account, Error, Operation, Rejection, SharedAccount};

/// Receiving side of a transfer.
pub trait DepositTarget {
    fn is_active(&self) -> bool;
    fn deposit(&mut self, amount: Decimal) -> Result<(), Rejection>;
}

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait AccountRepository {
    /// Fails if an account for the same holder already exists.
    fn open(&mut self, account: Account) -> Result<SharedAccount, Error>;

    fn get(&self, holder: &str) -> Option<SharedAccount>;

    fn flush(&mut self) -> Result<(), Error>;
}
