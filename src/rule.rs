//! Categorization rules and the rules file loader.

use crate::error::{CategorizerError, Result};
use crate::rows::read_rows;
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of columns in a rules file row.
const RULE_FIELDS: usize = 3;

/// Maps transactions to a category by recipient and description substrings.
///
/// Rules file rows are `recipient_pattern,description_pattern,category`, with
/// no header. An empty description pattern matches any details; an empty
/// recipient pattern matches any recipient.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    /// Substring the recipient must contain.
    pub recipient_pattern: String,

    /// Substring the details must contain, or empty for "any".
    pub description_pattern: String,

    /// Category label assigned on match.
    pub category: String,
}

impl Rule {
    /// Creates a rule from its three parts.
    pub fn new(
        recipient_pattern: impl Into<String>,
        description_pattern: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Rule {
            recipient_pattern: recipient_pattern.into(),
            description_pattern: description_pattern.into(),
            category: category.into(),
        }
    }

    /// Case-sensitive substring match against a transaction's recipient and details.
    pub fn matches(&self, recipient: &str, details: &str) -> bool {
        recipient.contains(self.recipient_pattern.as_str())
            && (self.description_pattern.is_empty()
                || details.contains(self.description_pattern.as_str()))
    }
}

/// Reads rules from a headerless CSV stream, preserving file order.
///
/// `source_name` is only used to label errors.
pub fn load_rules<R: Read>(reader: R, source_name: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for (idx, record) in read_rows(reader, source_name)?.into_iter().enumerate() {
        let row = idx + 1;
        if record.len() != RULE_FIELDS {
            return Err(CategorizerError::InvalidRecord {
                source_name: source_name.to_string(),
                row,
                message: format!(
                    "expected {} fields, found {}",
                    RULE_FIELDS,
                    record.len()
                ),
            });
        }

        let rule: Rule = record.deserialize(None)?;
        debug!("Row {}: rule {:?}", row, rule);
        rules.push(rule);
    }

    Ok(rules)
}

/// Opens `path` and loads its rules.
pub fn load_rules_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CategorizerError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_rules(BufReader::new(file), &path.display().to_string())
}
