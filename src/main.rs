//! Transaction Categorizer CLI
//!
//! Loads a rules file and a transactions export, then prints the sum per
//! category and the grand total.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv rules.csv
//! ```
//!
//! # Exit Codes
//!
//! - `0`: success
//! - `1`: a file could not be read or parsed
//! - `3`: missing or unknown arguments
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use log::info;
use std::env;
use std::io::{self, Write};
use std::process;
use txn_categorizer::config::USAGE;
use txn_categorizer::summary::SEPARATOR;
use txn_categorizer::{
    aggregate, load_rules_from_path, load_transactions_from_path, CategorizerError, Config,
    Result,
};

/// Exit status for command-line usage errors.
const USAGE_EXIT_CODE: i32 = 3;

fn main() {
    env_logger::init();

    let result = Config::from_args(env::args().skip(1)).and_then(|config| run(&config));

    match result {
        Ok(()) => {}
        Err(e) if e.is_usage() => {
            if let CategorizerError::UnknownOption(_) = e {
                println!("{}", e);
            }
            println!("{}", USAGE);
            process::exit(USAGE_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<()> {
    // Both inputs are loaded before anything is printed, so a bad file
    // produces no partial report.
    let rules = load_rules_from_path(&config.rules_path)?;
    let transactions =
        load_transactions_from_path(&config.transactions_path, config.amount_policy)?;
    info!(
        "Loaded {} rules from {} and {} transactions from {}",
        rules.len(),
        config.rules_path.display(),
        transactions.len(),
        config.transactions_path.display()
    );

    let summary = aggregate(&transactions, &rules)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "Loaded {} rules", rules.len())?;
    writeln!(handle, "Loaded {} transactions", transactions.len())?;
    writeln!(handle, "{}", SEPARATOR)?;
    for unmatched in summary.unmatched() {
        writeln!(handle, "{}, {}", unmatched.recipient, unmatched.details)?;
    }
    summary.write_report(&mut handle)?;

    Ok(())
}
