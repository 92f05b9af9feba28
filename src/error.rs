//! Error types for the transaction categorizer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for categorizer operations
pub type Result<T> = std::result::Result<T, CategorizerError>;

/// Errors that can occur while loading inputs or reporting.
#[derive(Error, Debug)]
pub enum CategorizerError {
    /// Failed to open or read an input file, or to write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Could not open a named input file
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error (malformed quoting, invalid UTF-8, ...)
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A row with the wrong shape
    #[error("Invalid record in {source_name} at row {row}: {message}")]
    InvalidRecord {
        source_name: String,
        row: usize,
        message: String,
    },

    /// Amount column could not be parsed as a decimal
    #[error("Invalid amount {value:?} at row {row}")]
    InvalidAmount { row: usize, value: String },

    /// A running sum left the representable decimal range
    #[error("Amount overflow while summing {category}")]
    AmountOverflow { category: String },

    /// Fewer than two positional arguments
    #[error("Missing required arguments")]
    MissingArgument,

    /// Unrecognised `--option`
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

impl CategorizerError {
    /// Returns `true` for errors caused by bad command-line usage.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CategorizerError::MissingArgument | CategorizerError::UnknownOption(_)
        )
    }
}
