//! Money type for product prices.
//!
//! The listing endpoint sends prices as decimal numbers in an implicit
//! currency (US dollars). They are converted once, at the boundary, into
//! integer cents so that display and comparison never touch floats again.

use serde::{Deserialize, Serialize};
use std::fmt;

const CURRENCY_SYMBOL: &str = "$";

/// A non-negative price in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a price from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Convert a decimal amount from the wire.
    ///
    /// Returns `None` unless the amount is a non-negative, finite number of
    /// whole cents that fits in an `i64`. Sub-cent amounts are refused
    /// rather than rounded, so the displayed price is always the sent one.
    ///
    /// ```
    /// use mystic_catalog::Money;
    /// assert_eq!(Money::from_decimal(45.99).unwrap().amount_cents, 4599);
    /// assert!(Money::from_decimal(-1.0).is_none());
    /// assert!(Money::from_decimal(1.005).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }

        let cents = amount * 100.0;
        // 2^63 is exactly representable; anything at or above it saturates.
        if cents >= i64::MAX as f64 {
            return None;
        }

        let whole = cents.round();
        if (cents - whole).abs() > cents_tolerance(cents) {
            return None;
        }
        Some(Self::new(whole as i64))
    }

    /// Format for display (e.g. "$45.99").
    pub fn display(&self) -> String {
        format!(
            "{}{}.{:02}",
            CURRENCY_SYMBOL,
            self.amount_cents / 100,
            self.amount_cents % 100
        )
    }
}

/// Slack allowed between a scaled amount and its nearest whole cent.
///
/// Decimal prices like 45.99 have no exact binary form, so `45.99 * 100.0`
/// lands a few ulps off 4599. The slack grows with magnitude so large prices
/// are not rejected for float noise.
fn cents_tolerance(cents: f64) -> f64 {
    (cents.abs() * f64::EPSILON * 4.0).max(1e-6)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(89.99), Some(Money::new(8999)));
        assert_eq!(Money::from_decimal(124.99), Some(Money::new(12499)));
        assert_eq!(Money::from_decimal(0.0), Some(Money::new(0)));
    }

    #[test]
    fn test_money_rejects_bad_amounts() {
        assert!(Money::from_decimal(-0.01).is_none());
        assert!(Money::from_decimal(f64::NAN).is_none());
        assert!(Money::from_decimal(f64::INFINITY).is_none());
    }

    #[test]
    fn test_money_rejects_amounts_past_i64_cents() {
        assert!(Money::from_decimal(1e20).is_none());
        assert!(Money::from_decimal(9.3e16).is_none());
        assert_eq!(
            Money::from_decimal(1e15),
            Some(Money::new(100_000_000_000_000_000))
        );
    }

    #[test]
    fn test_money_refuses_sub_cent_amounts() {
        assert!(Money::from_decimal(1.005).is_none());
        assert!(Money::from_decimal(0.001).is_none());
        assert!(Money::from_decimal(19.999).is_none());
        // Float noise on two-decimal prices is not sub-cent precision.
        assert_eq!(Money::from_decimal(0.1 + 0.2), Some(Money::new(30)));
        assert_eq!(Money::from_decimal(1.1), Some(Money::new(110)));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4599).display(), "$45.99");
        assert_eq!(Money::new(4550).display(), "$45.50");
        assert_eq!(Money::new(7).display(), "$0.07");
        assert_eq!(Money::new(12000).to_string(), "$120.00");
    }
}
