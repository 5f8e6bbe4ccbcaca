//! The money value type.
//!
//! CRITICAL: amounts are whole cents. Nothing here touches floats.

use std::cmp::Ordering;
use std::fmt;

use centavo_shared::Currency;
use serde::{Deserialize, Serialize};

use super::format::FormatRule;

/// An amount of money in a single currency.
///
/// Values are immutable; every operation returns a new `Money`.
/// Two values are equal only if both the cents and the currency match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
    currency: Currency,
}

impl Money {
    /// Creates a new money value. No validation on sign or magnitude.
    #[must_use]
    pub fn new(cents: i64, currency: impl Into<Currency>) -> Self {
        Self {
            cents,
            currency: currency.into(),
        }
    }

    /// Creates a money value in the default currency.
    #[must_use]
    pub fn with_default_currency(cents: i64) -> Self {
        Self::new(cents, Currency::default())
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn empty(currency: impl Into<Currency>) -> Self {
        Self::new(0, currency)
    }

    /// Creates an amount in Canadian dollars.
    #[must_use]
    pub fn ca_dollar(cents: i64) -> Self {
        Self::new(cents, Currency::cad())
    }

    /// Creates an amount in US dollars.
    #[must_use]
    pub fn us_dollar(cents: i64) -> Self {
        Self::new(cents, Currency::usd())
    }

    /// The amount in the currency's minor unit.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// The currency of this amount.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.cents < 0
    }

    pub(crate) fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }
}

/// Same-currency values order by cents; mixed currencies are unordered
/// here. Use [`Money::compare`] to order through a bank.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_currency(other)
            .then_some(self.cents.cmp(&other.cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&[FormatRule::WithCurrency]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_new() {
        let money = Money::new(100, "USD");
        assert_eq!(money.cents(), 100);
        assert_eq!(money.currency(), &Currency::usd());
    }

    #[test]
    fn test_money_default_currency() {
        assert_eq!(Money::with_default_currency(100).currency(), &Currency::cad());
    }

    #[test]
    fn test_money_empty() {
        let money = Money::empty("USD");
        assert!(money.is_zero());
        assert_eq!(money, Money::us_dollar(0));
    }

    #[test]
    fn test_money_is_negative() {
        assert!(Money::ca_dollar(-10).is_negative());
        assert!(!Money::ca_dollar(10).is_negative());
        assert!(!Money::ca_dollar(0).is_negative());
    }

    #[test]
    fn test_equality_requires_same_currency() {
        assert_eq!(Money::ca_dollar(100), Money::ca_dollar(100));
        assert_ne!(Money::ca_dollar(100), Money::us_dollar(100));
        assert_ne!(Money::ca_dollar(100), Money::ca_dollar(101));
    }

    #[test]
    fn test_partial_ord() {
        assert!(Money::ca_dollar(100) < Money::ca_dollar(200));
        assert!(Money::ca_dollar(300) > Money::ca_dollar(200));
        assert_eq!(
            Money::ca_dollar(100).partial_cmp(&Money::us_dollar(100)),
            None
        );
    }

    #[test]
    fn test_sort_same_currency() {
        let mut values = vec![
            Money::ca_dollar(300),
            Money::ca_dollar(200),
            Money::ca_dollar(100),
        ];
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            values,
            vec![
                Money::ca_dollar(100),
                Money::ca_dollar(200),
                Money::ca_dollar(300),
            ]
        );
    }

    #[test]
    fn test_display_includes_currency() {
        assert_eq!(Money::ca_dollar(100).to_string(), "$1.00 CAD");
        assert_eq!(Money::ca_dollar(0).to_string(), "free");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Money::ca_dollar(1000)).unwrap();
        assert_eq!(json, serde_json::json!({ "cents": 1000, "currency": "CAD" }));

        let back: Money = serde_json::from_value(json).unwrap();
        assert_eq!(back, Money::ca_dollar(1000));
    }
}
