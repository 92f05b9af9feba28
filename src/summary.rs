//! Per-category aggregation and the printed report.
//!
//! Every transaction lands in exactly one bucket (possibly
//! [`UNCATEGORIZED`](crate::categorizer::UNCATEGORIZED)), so the bucket
//! totals always add up to [`CategorySummary::total`] exactly.

use crate::categorizer::{find_rule, UNCATEGORIZED};
use crate::decimal::Amount;
use crate::error::{CategorizerError, Result};
use crate::rule::Rule;
use crate::transaction::Transaction;
use log::debug;
use std::collections::HashMap;
use std::io::Write;

/// Separator line used between report sections.
pub const SEPARATOR: &str = "--------------------------";

/// Currency label appended to every printed amount.
pub const CURRENCY: &str = "EUR";

/// A transaction that no rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmatched {
    pub recipient: String,
    pub details: String,
}

/// Running sums per category, plus the transactions that fell through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummary {
    totals: HashMap<String, Amount>,
    unmatched: Vec<Unmatched>,
}

impl CategorySummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `category`, creating the bucket on first sight.
    ///
    /// The bucket is left unchanged if the sum overflows.
    pub fn add(&mut self, category: &str, amount: Amount) -> Result<()> {
        match self.totals.get_mut(category) {
            Some(sum) => {
                *sum = sum
                    .checked_add(amount)
                    .ok_or_else(|| CategorizerError::AmountOverflow {
                        category: category.to_string(),
                    })?;
            }
            None => {
                self.totals.insert(category.to_string(), amount);
            }
        }
        Ok(())
    }

    /// Category sums (iteration order unspecified).
    pub fn totals(&self) -> &HashMap<String, Amount> {
        &self.totals
    }

    /// Sum for a single category, if any transaction landed there.
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.totals.get(category).copied()
    }

    /// Unmatched transactions, in input order.
    pub fn unmatched(&self) -> &[Unmatched] {
        &self.unmatched
    }

    /// Returns `true` if no transaction has been added.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of all buckets.
    pub fn total(&self) -> Result<Amount> {
        total(&self.totals)
    }

    /// Categories and sums sorted by category name.
    pub fn sorted(&self) -> Vec<(&str, Amount)> {
        let mut entries: Vec<_> = self
            .totals
            .iter()
            .map(|(category, sum)| (category.as_str(), *sum))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Writes the per-category lines, a separator and the total line.
    ///
    /// Categories are sorted lexicographically so output is reproducible.
    /// The total is computed first, so an overflow writes nothing.
    pub fn write_report<W: Write>(&self, mut writer: W) -> Result<()> {
        let grand_total = self.total()?;
        for (category, sum) in self.sorted() {
            writeln!(writer, "[{}] {} {}", category, sum, CURRENCY)?;
        }
        writeln!(writer, "{}", SEPARATOR)?;
        writeln!(writer, "[TOTAL] {} {}", grand_total, CURRENCY)?;
        writer.flush()?;
        Ok(())
    }
}

/// Categorizes every transaction and folds the amounts into per-category sums.
///
/// Fails with [`CategorizerError::AmountOverflow`] if a category sum or the
/// grand total leaves the decimal range.
pub fn aggregate(transactions: &[Transaction], rules: &[Rule]) -> Result<CategorySummary> {
    let mut summary = CategorySummary::new();

    for tx in transactions {
        let category = match find_rule(rules, &tx.recipient, &tx.details) {
            Some(rule) => rule.category.as_str(),
            None => {
                summary.unmatched.push(Unmatched {
                    recipient: tx.recipient.clone(),
                    details: tx.details.clone(),
                });
                UNCATEGORIZED
            }
        };
        debug!("{} -> {} ({})", tx.recipient, category, tx.amount);
        summary.add(category, tx.amount)?;
    }

    summary.total()?;
    Ok(summary)
}

/// Sum of all bucket values, starting from an exact zero.
pub fn total(totals: &HashMap<String, Amount>) -> Result<Amount> {
    totals.values().try_fold(Amount::ZERO, |acc, value| {
        acc.checked_add(*value)
            .ok_or_else(|| CategorizerError::AmountOverflow {
                category: "TOTAL".to_string(),
            })
    })
}
