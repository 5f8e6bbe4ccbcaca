//! Exchange banks.
//!
//! A bank is the strategy that converts cents from one currency into
//! another. Two are provided:
//!
//! - `NoExchangeBank` - refuses every cross-currency conversion
//! - `VariableExchangeBank` - converts through a table of pairwise rates

pub mod no_exchange;
pub mod variable;

use std::fmt;

use centavo_shared::{Currency, MoneyResult};

use crate::money::Money;

pub use no_exchange::NoExchangeBank;
pub use variable::VariableExchangeBank;

/// Converts amounts between currencies.
pub trait Bank: fmt::Debug + Send + Sync {
    /// Converts `cents` from `from` into `to`.
    ///
    /// Same-currency conversions must return `cents` unchanged.
    fn exchange(&self, cents: i64, from: &Currency, to: &Currency) -> MoneyResult<i64>;

    /// Converts a money value into `to`.
    fn reduce(&self, money: &Money, to: &Currency) -> MoneyResult<Money> {
        let cents = self.exchange(money.cents(), money.currency(), to)?;
        Ok(Money::new(cents, to.clone()))
    }
}

impl<B: Bank + ?Sized> Bank for std::sync::Arc<B> {
    fn exchange(&self, cents: i64, from: &Currency, to: &Currency) -> MoneyResult<i64> {
        (**self).exchange(cents, from, to)
    }
}
