//! Thread-safe handle to an [`Account`].
//!
//! Every operation holds the account's lock for its whole duration. Transfers
//! lock both accounts in ascending id order, so two transfers running in
//! opposite directions cannot deadlock.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, MutexGuard};
use rust_decimal::Decimal;

use crate::domain::{Account, Rejection};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
pub struct SharedAccount {
    id: u64,
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock()
    }

    pub fn holder(&self) -> String {
        self.lock().holder().to_owned()
    }

    pub fn balance(&self) -> Decimal {
        self.lock().balance()
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_active()
    }

    pub fn withdrawn_today(&self) -> Decimal {
        self.lock().withdrawn_today()
    }

    pub fn deposit(&self, amount: Decimal) -> Result<(), Rejection> {
        self.lock().deposit(amount)
    }

    pub fn withdraw(&self, amount: Decimal) -> Result<(), Rejection> {
        self.lock().withdraw(amount)
    }

    pub fn close(&self) -> Result<(), Rejection> {
        self.lock().close()
    }

    pub fn reset_daily_withdrawal(&self) {
        self.lock().reset_daily_withdrawal()
    }

    pub fn transfer(&self, destination: &SharedAccount, amount: Decimal) -> Result<(), Rejection> {
        if self.id == destination.id {
            // Same account on both sides: one lock, debit then credit.
            let mut account = self.lock();
            account.withdraw(amount)?;
            return account.deposit(amount);
        }

        let (mut source, mut target) = if self.id < destination.id {
            let source = self.lock();
            let target = destination.lock();
            (source, target)
        } else {
            let target = destination.lock();
            let source = self.lock();
            (source, target)
        };

        source.transfer(&mut *target, amount)
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
