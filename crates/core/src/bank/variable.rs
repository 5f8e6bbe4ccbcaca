//! Bank backed by a table of directed exchange rates.

use centavo_shared::{Currency, MoneyError, MoneyResult};
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;

use super::Bank;
use crate::money::rounding::scale_floor;

/// Converts through registered rates.
///
/// Each direction is registered on its own: a USD to CAD rate says nothing
/// about CAD to USD. Rates can be added through a shared reference, so one
/// bank can sit behind an `Arc` while the table is updated.
#[derive(Debug, Default)]
pub struct VariableExchangeBank {
    rates: DashMap<(Currency, Currency), Decimal>,
}

impl VariableExchangeBank {
    /// Creates a bank with no rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or overwrites) the rate for `from` to `to`.
    ///
    /// 1 `from` = `rate` `to`. The rate is not validated.
    pub fn add_rate(&self, from: impl Into<Currency>, to: impl Into<Currency>, rate: Decimal) {
        let from = from.into();
        let to = to.into();
        debug!(%from, %to, %rate, "Exchange rate registered");
        self.rates.insert((from, to), rate);
    }

    /// Returns the rate for `from` to `to`, if one is registered.
    #[must_use]
    pub fn rate(&self, from: &Currency, to: &Currency) -> Option<Decimal> {
        self.rates
            .get(&(from.clone(), to.clone()))
            .map(|entry| *entry.value())
    }

    /// Number of registered rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rate is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Bank for VariableExchangeBank {
    fn exchange(&self, cents: i64, from: &Currency, to: &Currency) -> MoneyResult<i64> {
        if from == to {
            return Ok(cents);
        }

        let Some(rate) = self.rate(from, to) else {
            debug!(%from, %to, "Exchange refused: no rate registered");
            return Err(MoneyError::no_exchange_rate(from, to));
        };

        let exchanged = scale_floor(cents, rate)?;
        debug!(%from, %to, %rate, cents, exchanged, "Amount exchanged");
        Ok(exchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use rust_decimal_macros::dec;

    fn bank() -> VariableExchangeBank {
        let bank = VariableExchangeBank::new();
        bank.add_rate("USD", "CAD", dec!(1.24515));
        bank.add_rate("CAD", "USD", dec!(0.803115));
        bank
    }

    #[test]
    fn test_unknown_exchange() {
        let bank = VariableExchangeBank::new();
        let err = bank
            .reduce(&Money::us_dollar(100), &Currency::cad())
            .unwrap_err();
        assert!(err.is_exchange());
    }

    #[test]
    fn test_exchange() {
        let bank = bank();
        assert_eq!(
            bank.reduce(&Money::us_dollar(100), &Currency::cad()).unwrap(),
            Money::ca_dollar(124)
        );
        assert_eq!(
            bank.reduce(&Money::ca_dollar(100), &Currency::usd()).unwrap(),
            Money::us_dollar(80)
        );
    }

    #[test]
    fn test_exchange_floors_cents() {
        let bank = bank();
        assert_eq!(bank.exchange(10000, &Currency::usd(), &Currency::cad()).unwrap(), 12451);
        assert_eq!(bank.exchange(10000, &Currency::cad(), &Currency::usd()).unwrap(), 8031);
    }

    #[test]
    fn test_same_currency_needs_no_rate() {
        let bank = VariableExchangeBank::new();
        assert_eq!(bank.exchange(100, &Currency::cad(), &Currency::cad()).unwrap(), 100);
    }

    #[test]
    fn test_no_inverse_rate_derived() {
        let bank = VariableExchangeBank::new();
        bank.add_rate("USD", "CAD", dec!(1.24515));
        assert!(bank.exchange(100, &Currency::cad(), &Currency::usd()).is_err());
    }

    #[test]
    fn test_add_rate_overwrites() {
        let bank = bank();
        bank.add_rate("USD", "CAD", dec!(2));
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.rate(&Currency::usd(), &Currency::cad()), Some(dec!(2)));
        assert_eq!(bank.exchange(100, &Currency::usd(), &Currency::cad()).unwrap(), 200);
    }

    #[test]
    fn test_len_and_is_empty() {
        let bank = VariableExchangeBank::new();
        assert!(bank.is_empty());
        bank.add_rate("EUR", "USD", dec!(1.1));
        assert!(!bank.is_empty());
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.rate(&Currency::usd(), &Currency::new("EUR")), None);
    }
}
