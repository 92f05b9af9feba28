//! Command-line configuration.

use crate::error::{CategorizerError, Result};
use crate::transaction::AmountPolicy;
use log::debug;
use std::path::PathBuf;

/// Usage line printed when arguments are missing or unknown.
pub const USAGE: &str =
    "Usage: txn-categorizer [--lenient-amounts] <transactions_csv> <rules_csv>";

/// Flag that switches unparseable amounts from fatal to zero.
pub const LENIENT_AMOUNTS_FLAG: &str = "--lenient-amounts";

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub transactions_path: PathBuf,
    pub rules_path: PathBuf,
    pub amount_policy: AmountPolicy,
}

impl Config {
    /// Builds a configuration from process arguments, excluding the program name.
    ///
    /// Positional arguments past the second are ignored.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional = Vec::new();
        let mut amount_policy = AmountPolicy::Strict;

        for arg in args.into_iter().map(Into::into) {
            if arg == LENIENT_AMOUNTS_FLAG {
                amount_policy = AmountPolicy::ZeroOnError;
            } else if arg.starts_with("--") {
                return Err(CategorizerError::UnknownOption(arg));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() < 2 {
            return Err(CategorizerError::MissingArgument);
        }
        if positional.len() > 2 {
            debug!("Ignoring extra arguments: {:?}", &positional[2..]);
        }

        let mut positional = positional.into_iter();
        match (positional.next(), positional.next()) {
            (Some(transactions), Some(rules)) => Ok(Config {
                transactions_path: PathBuf::from(transactions),
                rules_path: PathBuf::from(rules),
                amount_policy,
            }),
            _ => Err(CategorizerError::MissingArgument),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals() {
        let config = Config::from_args(["tx.csv", "rules.csv"]).unwrap();
        assert_eq!(config.transactions_path, PathBuf::from("tx.csv"));
        assert_eq!(config.rules_path, PathBuf::from("rules.csv"));
        assert_eq!(config.amount_policy, AmountPolicy::Strict);
    }

    #[test]
    fn test_missing_arguments() {
        let none: [&str; 0] = [];
        assert!(matches!(
            Config::from_args(none),
            Err(CategorizerError::MissingArgument)
        ));
        assert!(matches!(
            Config::from_args(["tx.csv"]),
            Err(CategorizerError::MissingArgument)
        ));
        assert!(matches!(
            Config::from_args(["tx.csv", "--lenient-amounts"]),
            Err(CategorizerError::MissingArgument)
        ));
    }

    #[test]
    fn test_lenient_flag_anywhere() {
        let config = Config::from_args(["--lenient-amounts", "tx.csv", "rules.csv"]).unwrap();
        assert_eq!(config.amount_policy, AmountPolicy::ZeroOnError);

        let config = Config::from_args(["tx.csv", "rules.csv", "--lenient-amounts"]).unwrap();
        assert_eq!(config.amount_policy, AmountPolicy::ZeroOnError);
    }

    #[test]
    fn test_unknown_option() {
        let err = Config::from_args(["--verbose", "tx.csv", "rules.csv"]).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("--verbose"));
    }

    #[test]
    fn test_extra_positionals_ignored() {
        let config = Config::from_args(["a.csv", "b.csv", "c.csv"]).unwrap();
        assert_eq!(config.rules_path, PathBuf::from("b.csv"));
    }
}
