use rust_decimal::Decimal;

use crate::domain::Error;

/// Per-account limits fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountPolicy {
    daily_limit: Decimal,
}

impl AccountPolicy {
    pub const DEFAULT_DAILY_LIMIT: Decimal = Decimal::ONE_THOUSAND;

    pub fn new(daily_limit: Decimal) -> Result<Self, Error> {
        if daily_limit < Decimal::ZERO {
            return Err(Error::InvalidArgument(format!(
                "Daily limit cannot be negative: {}",
                daily_limit
            )));
        }

        Ok(Self { daily_limit })
    }

    pub fn daily_limit(&self) -> Decimal {
        self.daily_limit
    }
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            daily_limit: Self::DEFAULT_DAILY_LIMIT,
        }
    }
}
