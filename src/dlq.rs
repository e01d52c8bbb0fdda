use crate::domain::{DeadLetterQueue, Error};

/// Reports failed operations on stderr, leaving stdout to the account output.
#[derive(Default, Debug)]
pub struct StdErrDLQ {}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error) {
        match error {
            Error::Rejected { holder, reason } => {
                tracing::debug!(holder = %holder, %reason, "operation rejected");
                eprintln!("DLQ Report - Rejected for {}: {}", holder, reason);
            }
            other => {
                tracing::debug!(error = %other, "operation failed");
                eprintln!("DLQ Report - Error: {}", other);
            }
        }
    }
}
