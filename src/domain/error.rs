use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Engine failed with: {0}")]
    Engine(String),

    #[error("Operation rejected for {holder}: {reason}")]
    Rejected { holder: String, reason: Rejection },
}

/// Soft failure of an account operation. The account is left exactly as it was,
/// except for [`Rejection::RolledBack`] where the source keeps its consumed
/// daily-limit usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("account is closed")]
    Inactive,

    #[error("destination account is closed")]
    DestinationInactive,

    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("daily limit {limit} exceeded: withdrawn today {withdrawn}, requested {requested}")]
    DailyLimitExceeded {
        limit: Decimal,
        withdrawn: Decimal,
        requested: Decimal,
    },

    #[error("balance {balance} cannot absorb {requested}")]
    BalanceOverflow { balance: Decimal, requested: Decimal },

    #[error("balance must be zero to close, got {0}")]
    NonZeroBalance(Decimal),

    #[error("destination refused deposit, {0} returned to source")]
    RolledBack(Decimal),
}
