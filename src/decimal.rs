//! Exact decimal amounts for currency sums.
//!
//! Wraps `rust_decimal` so that summing many transactions never picks up
//! binary floating-point drift.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A signed decimal amount in the (single, implicit) account currency.
///
/// The scale written in the input is preserved, so `"-12.50"` displays as
/// `-12.50` and the sum of two-place amounts keeps two places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use txn_categorizer::Amount;
///
/// let a = Amount::from_str("-10.00").unwrap();
/// let b = Amount::from_str("-5.00").unwrap();
/// assert_eq!(a.checked_add(b).unwrap().to_string(), "-15.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero with one decimal place; an empty report totals `0.0`.
    pub const ZERO: Self = Amount(Decimal::from_parts(0, 0, 0, false, 1));

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Exact addition, or `None` when the result leaves the 96-bit range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_from_str_keeps_scale() {
        assert_eq!(amount("-12.50").to_string(), "-12.50");
        assert_eq!(amount("3").to_string(), "3");
        assert_eq!(amount("  2.5  ").to_string(), "2.5");
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("").is_err());
        assert!(Amount::from_str("1,50").is_err());
    }

    #[test]
    fn test_zero_constant() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::ZERO.to_string(), "0.0");
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn test_addition_is_exact() {
        let mut sum = Amount::ZERO;
        for _ in 0..10 {
            sum = sum.checked_add(amount("0.1")).unwrap();
        }
        assert_eq!(sum, amount("1.0"));
        assert_eq!(
            amount("-10.00").checked_add(amount("-5.00")).unwrap().to_string(),
            "-15.00"
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = amount("79228162514264337593543950335");
        assert!(max.checked_add(amount("1")).is_none());
        assert!(max.checked_add(amount("-1")).is_some());
    }
}
