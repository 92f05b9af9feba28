//! Bank transactions and the transactions file loader.

use crate::decimal::Amount;
use crate::error::{CategorizerError, Result};
use crate::rows::read_rows;
use csv::StringRecord;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Minimum number of columns in a transactions file row.
const MIN_FIELDS: usize = 6;

const RECIPIENT_FIELD: usize = 1;
const TYPE_FIELD: usize = 3;
const DETAILS_FIELD: usize = 4;
const AMOUNT_FIELD: usize = 5;

/// A single money movement from a bank export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Counterparty name as exported by the bank.
    pub recipient: String,

    /// Bank-specific transaction type (e.g. "debit").
    pub tx_type: String,

    /// Free-text details / reference.
    pub details: String,

    /// Signed amount; negative for outgoing money.
    pub amount: Amount,
}

impl Transaction {
    /// Creates a transaction from its parts.
    pub fn new(
        recipient: impl Into<String>,
        tx_type: impl Into<String>,
        details: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Transaction {
            recipient: recipient.into(),
            tx_type: tx_type.into(),
            details: details.into(),
            amount,
        }
    }
}

/// What to do with an amount column that is not a decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountPolicy {
    /// Abort loading with [`CategorizerError::InvalidAmount`].
    #[default]
    Strict,

    /// Log a warning and count the transaction as zero.
    ZeroOnError,
}

impl AmountPolicy {
    fn resolve(self, raw: &str, row: usize) -> Result<Amount> {
        match Amount::from_str(raw) {
            Ok(amount) => Ok(amount),
            Err(e) => match self {
                AmountPolicy::Strict => Err(CategorizerError::InvalidAmount {
                    row,
                    value: raw.to_string(),
                }),
                AmountPolicy::ZeroOnError => {
                    warn!(
                        "Row {}: invalid amount {:?} ({}), counting as zero",
                        row, raw, e
                    );
                    Ok(Amount::ZERO)
                }
            },
        }
    }
}

/// Builds a transaction from one CSV row.
///
/// Columns 0 and 2 (date / id metadata) are ignored; anything past column 5
/// is ignored as well.
fn parse_record(
    record: &StringRecord,
    row: usize,
    source_name: &str,
    policy: AmountPolicy,
) -> Result<Transaction> {
    if record.len() < MIN_FIELDS {
        return Err(CategorizerError::InvalidRecord {
            source_name: source_name.to_string(),
            row,
            message: format!(
                "expected at least {} fields, found {}",
                MIN_FIELDS,
                record.len()
            ),
        });
    }

    // Length checked above
    let field = |idx: usize| record.get(idx).unwrap_or_default();

    Ok(Transaction {
        recipient: field(RECIPIENT_FIELD).to_string(),
        tx_type: field(TYPE_FIELD).to_string(),
        details: field(DETAILS_FIELD).to_string(),
        amount: policy.resolve(field(AMOUNT_FIELD), row)?,
    })
}

/// Reads transactions from a headerless CSV stream, preserving file order.
pub fn load_transactions<R: Read>(
    reader: R,
    source_name: &str,
    policy: AmountPolicy,
) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();
    for (idx, record) in read_rows(reader, source_name)?.into_iter().enumerate() {
        let row = idx + 1;
        let tx = parse_record(&record, row, source_name, policy)?;
        debug!("Row {}: {} {} {:?}", row, tx.recipient, tx.amount, tx.details);
        transactions.push(tx);
    }

    Ok(transactions)
}

/// Opens `path` and loads its transactions.
pub fn load_transactions_from_path<P: AsRef<Path>>(
    path: P,
    policy: AmountPolicy,
) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CategorizerError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_transactions(BufReader::new(file), &path.display().to_string(), policy)
}
