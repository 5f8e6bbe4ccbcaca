//! Money arithmetic, comparison and exchange.
//!
//! Cross-currency operations always convert the right-hand operand into
//! the currency of `self`, so the result keeps `self`'s currency.

use std::cmp::Ordering;

use centavo_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::rounding::{divide_truncate, scale_floor};
use super::value::Money;
use crate::bank::Bank;

impl Money {
    /// Adds two amounts, exchanging `other` first if needed.
    pub fn add<B: Bank + ?Sized>(&self, other: &Self, bank: &B) -> MoneyResult<Self> {
        let other_cents = self.cents_in_own_currency(other, bank)?;
        let cents = self
            .cents()
            .checked_add(other_cents)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(cents, self.currency().clone()))
    }

    /// Subtracts `other`, exchanging it first if needed.
    pub fn subtract<B: Bank + ?Sized>(&self, other: &Self, bank: &B) -> MoneyResult<Self> {
        let other_cents = self.cents_in_own_currency(other, bank)?;
        let cents = self
            .cents()
            .checked_sub(other_cents)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(cents, self.currency().clone()))
    }

    /// Multiplies the amount, flooring to whole cents.
    ///
    /// ```
    /// use centavo_core::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::ca_dollar(500).multiply(dec!(0.5)).unwrap(), Money::ca_dollar(250));
    /// assert_eq!(Money::ca_dollar(100).multiply(55).unwrap(), Money::ca_dollar(5500));
    /// ```
    pub fn multiply(&self, factor: impl Into<Decimal>) -> MoneyResult<Self> {
        let cents = scale_floor(self.cents(), factor.into())?;
        Ok(Self::new(cents, self.currency().clone()))
    }

    /// Divides the amount, truncating toward zero.
    ///
    /// Unlike [`Money::multiply`] this does not floor: `-7 / 2` is `-3`.
    pub fn divide(&self, divisor: impl Into<Decimal>) -> MoneyResult<Self> {
        let cents = divide_truncate(self.cents(), divisor.into())?;
        Ok(Self::new(cents, self.currency().clone()))
    }

    /// Compares two amounts, exchanging `other` into this currency if needed.
    pub fn compare<B: Bank + ?Sized>(&self, other: &Self, bank: &B) -> MoneyResult<Ordering> {
        let other_cents = self.cents_in_own_currency(other, bank)?;
        Ok(self.cents().cmp(&other_cents))
    }

    /// Returns this amount converted into `target` by the bank.
    pub fn exchange_to<B: Bank + ?Sized>(
        &self,
        target: impl Into<Currency>,
        bank: &B,
    ) -> MoneyResult<Self> {
        bank.reduce(self, &target.into())
    }

    /// Returns this amount in US dollars.
    pub fn as_us_dollar<B: Bank + ?Sized>(&self, bank: &B) -> MoneyResult<Self> {
        self.exchange_to(Currency::usd(), bank)
    }

    /// Returns this amount in Canadian dollars.
    pub fn as_ca_dollar<B: Bank + ?Sized>(&self, bank: &B) -> MoneyResult<Self> {
        self.exchange_to(Currency::cad(), bank)
    }

    fn cents_in_own_currency<B: Bank + ?Sized>(&self, other: &Self, bank: &B) -> MoneyResult<i64> {
        if self.same_currency(other) {
            Ok(other.cents())
        } else {
            bank.exchange(other.cents(), other.currency(), self.currency())
        }
    }
}
