pub mod account;
pub mod error;
pub mod operation;
pub mod policy;
pub mod shared;
pub mod traits;

pub use account::Account;
pub use error::{Error, Rejection};
pub use operation::{Operation, OperationKind};
pub use policy::AccountPolicy;
pub use shared::SharedAccount;
pub use traits::{AccountRepository, DeadLetterQueue, DepositTarget, OperationStream};
