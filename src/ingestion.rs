use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Operation, OperationKind};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    op: String,
    holder: String,
    amount: Option<String>,
    target: Option<String>,
}

/// Parses the exact decimal text, never going through a float.
fn parse_amount(op: &str, amount: Option<String>) -> Result<Decimal, Error> {
    let raw = amount
        .filter(|a| !a.is_empty())
        .ok_or_else(|| Error::Ingestion(format!("Missing amount for {}", op)))?;

    Decimal::from_str_exact(&raw)
        .map_err(|e| Error::Ingestion(format!("Invalid amount {:?}: {}", raw, e)))
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let op = row.op.to_ascii_lowercase();
        let kind = match op.as_str() {
            "open" => OperationKind::Open {
                initial_balance: parse_amount(&op, row.amount)?,
            },
            "deposit" => OperationKind::Deposit {
                amount: parse_amount(&op, row.amount)?,
            },
            "withdraw" => OperationKind::Withdraw {
                amount: parse_amount(&op, row.amount)?,
            },
            "transfer" => OperationKind::Transfer {
                amount: parse_amount(&op, row.amount)?,
                destination: row
                    .target
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| Error::Ingestion("Missing target for transfer".to_string()))?,
            },
            "close" => OperationKind::Close,
            "reset" => OperationKind::ResetDailyWithdrawal,
            other => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        if row.holder.is_empty() {
            return Err(Error::Ingestion(format!("Missing holder for {}", op)));
        }

        Ok(Operation {
            kind,
            holder: row.holder,
        })
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take ownership of the reader so the iterator owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => return Box::pin(stream::empty::<Result<Operation, Error>>()),
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
