//! First-match-wins categorization.

use crate::rule::Rule;

/// Category assigned when no rule matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Returns the first rule, in sequence order, matching `recipient` and `details`.
///
/// Later, more specific rules never override an earlier match.
pub fn find_rule<'a>(rules: &'a [Rule], recipient: &str, details: &str) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.matches(recipient, details))
}

/// Returns the category of the first matching rule, or [`UNCATEGORIZED`].
pub fn categorize<'a>(rules: &'a [Rule], recipient: &str, details: &str) -> &'a str {
    find_rule(rules, recipient, details)
        .map(|rule| rule.category.as_str())
        .unwrap_or(UNCATEGORIZED)
}
