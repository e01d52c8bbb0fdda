use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::{self, Stdout, Write};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Account, AccountRepository, Error, SharedAccount};

const HEADER: [&str; 5] = ["holder", "balance", "withdrawn_today", "daily_limit", "active"];

#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    holder: &'a str,
    balance: Decimal,
    withdrawn_today: Decimal,
    daily_limit: Decimal,
    active: bool,
}

/// Accounts keyed by holder, written out as CSV in holder order on flush.
pub struct CsvOutput<W: Write> {
    accounts: BTreeMap<String, SharedAccount>,
    writer: csv::Writer<W>,
}

impl CsvOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CsvOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            accounts: BTreeMap::new(),
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer),
        }
    }

    pub fn into_inner(self) -> Result<W, Error> {
        self.writer
            .into_inner()
            .map_err(|e| Error::IO(e.into_error()))
    }
}

impl<W: Write> AccountRepository for CsvOutput<W> {
    fn open(&mut self, account: Account) -> Result<SharedAccount, Error> {
        let shared = SharedAccount::new(account);
        match self.accounts.entry(shared.holder()) {
            Entry::Vacant(e) => Ok(e.insert(shared).clone()),
            Entry::Occupied(e) => Err(Error::Engine(format!(
                "Account for {} already exists",
                e.key()
            ))),
        }
    }

    fn get(&self, holder: &str) -> Option<SharedAccount> {
        self.accounts.get(holder).cloned()
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.writer.write_record(HEADER)?;
        for shared in self.accounts.values() {
            let account = shared.lock();
            self.writer.serialize(AccountRow {
                holder: account.holder(),
                balance: account.balance(),
                withdrawn_today: account.withdrawn_today(),
                daily_limit: account.daily_limit(),
                active: account.is_active(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
