use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::domain::{AccountPolicy, DepositTarget, Error, Rejection};

/// A single bank account.
///
/// Once closed an account stays closed: it still answers reads and
/// [`Account::reset_daily_withdrawal`], but rejects every other mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    holder: String,
    balance: Decimal,
    active: bool,
    daily_limit: Decimal,
    withdrawn_today: Decimal, // withdrawals since the last reset
}

impl Account {
    pub fn new(holder: impl Into<String>, initial_balance: Decimal) -> Result<Self, Error> {
        Self::with_policy(holder, initial_balance, AccountPolicy::default())
    }

    pub fn with_policy(
        holder: impl Into<String>,
        initial_balance: Decimal,
        policy: AccountPolicy,
    ) -> Result<Self, Error> {
        if initial_balance < Decimal::ZERO {
            return Err(Error::InvalidArgument(format!(
                "Initial balance cannot be negative: {}",
                initial_balance
            )));
        }

        Ok(Self {
            holder: holder.into(),
            balance: initial_balance,
            active: true,
            daily_limit: policy.daily_limit(),
            withdrawn_today: Decimal::ZERO,
        })
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn daily_limit(&self) -> Decimal {
        self.daily_limit
    }

    pub fn withdrawn_today(&self) -> Decimal {
        self.withdrawn_today
    }

    pub fn remaining_daily_limit(&self) -> Decimal {
        self.daily_limit - self.withdrawn_today
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Rejection> {
        if !self.active {
            return self.reject("deposit", Rejection::Inactive);
        }
        if amount <= Decimal::ZERO {
            return self.reject("deposit", Rejection::NonPositiveAmount(amount));
        }

        let Some(balance) = self.balance.checked_add(amount) else {
            return self.reject(
                "deposit",
                Rejection::BalanceOverflow {
                    balance: self.balance,
                    requested: amount,
                },
            );
        };

        self.balance = balance;
        trace!(holder = %self.holder, %amount, balance = %self.balance, "deposit");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Rejection> {
        if !self.active {
            return self.reject("withdraw", Rejection::Inactive);
        }
        if amount <= Decimal::ZERO {
            return self.reject("withdraw", Rejection::NonPositiveAmount(amount));
        }
        if amount > self.balance {
            return self.reject(
                "withdraw",
                Rejection::InsufficientFunds {
                    balance: self.balance,
                    requested: amount,
                },
            );
        }
        // An overflowing sum is past any representable limit.
        let withdrawn_today = match self.withdrawn_today.checked_add(amount) {
            Some(total) if total <= self.daily_limit => total,
            _ => {
                return self.reject(
                    "withdraw",
                    Rejection::DailyLimitExceeded {
                        limit: self.daily_limit,
                        withdrawn: self.withdrawn_today,
                        requested: amount,
                    },
                );
            }
        };

        self.balance -= amount;
        self.withdrawn_today = withdrawn_today;
        trace!(
            holder = %self.holder,
            %amount,
            balance = %self.balance,
            withdrawn_today = %self.withdrawn_today,
            "withdraw"
        );
        Ok(())
    }

    /// Moves `amount` to `destination` through this account's own withdraw path,
    /// so balance and daily limit are enforced on the source.
    ///
    /// If the destination refuses the deposit after the source was debited, the
    /// amount is credited back to the source. The daily-limit usage of that
    /// withdrawal is kept.
    pub fn transfer<D>(&mut self, destination: &mut D, amount: Decimal) -> Result<(), Rejection>
    where
        D: DepositTarget + ?Sized,
    {
        if !self.active {
            return self.reject("transfer", Rejection::Inactive);
        }
        if !destination.is_active() {
            return self.reject("transfer", Rejection::DestinationInactive);
        }
        if amount <= Decimal::ZERO {
            return self.reject("transfer", Rejection::NonPositiveAmount(amount));
        }

        self.withdraw(amount)?;

        if let Err(reason) = destination.deposit(amount) {
            // Restores the pre-withdraw balance, so it cannot overflow.
            self.balance += amount;
            debug!(
                holder = %self.holder,
                %amount,
                %reason,
                withdrawn_today = %self.withdrawn_today,
                "transfer rolled back"
            );
            return Err(Rejection::RolledBack(amount));
        }

        Ok(())
    }

    /// Closes the account if its balance is exactly zero. Closing an already
    /// closed account with a zero balance succeeds again.
    pub fn close(&mut self) -> Result<(), Rejection> {
        if !self.balance.is_zero() {
            return self.reject("close", Rejection::NonZeroBalance(self.balance));
        }

        self.active = false;
        trace!(holder = %self.holder, "close");
        Ok(())
    }

    pub fn reset_daily_withdrawal(&mut self) {
        self.withdrawn_today = Decimal::ZERO;
    }

    fn reject(&self, operation: &'static str, reason: Rejection) -> Result<(), Rejection> {
        debug!(holder = %self.holder, operation, %reason, "rejected");
        Err(reason)
    }
}

impl DepositTarget for Account {
    fn is_active(&self) -> bool {
        Account::is_active(self)
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), Rejection> {
        Account::deposit(self, amount)
    }
}
