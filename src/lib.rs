//! # Transaction Categorizer
//!
//! Sorts bank transactions into categories using an ordered list of
//! substring rules and sums the amounts per category.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: amounts are `rust_decimal` values, never floats
//! - **First match wins**: rules are tried in file order
//! - **No hidden exits**: loaders return errors, the binary picks exit codes
//! - **Deterministic output**: report lines sorted by category name
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use txn_categorizer::{aggregate, load_rules, load_transactions, AmountPolicy};
//!
//! let rules = load_rules(Cursor::new("ACME,,Groceries\n"), "rules").unwrap();
//! let txs = load_transactions(
//!     Cursor::new("2024-01-02,ACME Market,1,debit,card,-12.50\n"),
//!     "transactions",
//!     AmountPolicy::Strict,
//! )
//! .unwrap();
//!
//! let summary = aggregate(&txs, &rules).unwrap();
//! assert_eq!(summary.get("Groceries").unwrap().to_string(), "-12.50");
//! ```

pub mod categorizer;
pub mod config;
pub mod decimal;
pub mod error;
mod rows;
pub mod rule;
pub mod summary;
pub mod transaction;

pub use categorizer::{categorize, find_rule, UNCATEGORIZED};
pub use config::Config;
pub use decimal::Amount;
pub use error::{CategorizerError, Result};
pub use rule::{load_rules, load_rules_from_path, Rule};
pub use summary::{aggregate, total, CategorySummary, Unmatched};
pub use transaction::{load_transactions, load_transactions_from_path, AmountPolicy, Transaction};
