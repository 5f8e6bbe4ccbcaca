//! Money context: the default currency and the bank in use.
//!
//! Replaces process-wide settings. Build one per application (or per
//! test) and hand its bank to the cross-currency operations.

use std::sync::Arc;

use centavo_shared::{BankKind, Currency, MoneyConfig};
use tracing::debug;

use crate::bank::{Bank, NoExchangeBank, VariableExchangeBank};
use crate::money::Money;

/// Default currency plus the active exchange bank.
#[derive(Debug, Clone)]
pub struct MoneyContext {
    default_currency: Currency,
    bank: Arc<dyn Bank>,
}

impl MoneyContext {
    /// Creates a context from its parts.
    #[must_use]
    pub fn new(default_currency: Currency, bank: Arc<dyn Bank>) -> Self {
        Self {
            default_currency,
            bank,
        }
    }

    /// Builds a context from configuration.
    #[must_use]
    pub fn from_config(config: &MoneyConfig) -> Self {
        let bank: Arc<dyn Bank> = match config.bank.kind {
            BankKind::NoExchange => Arc::new(NoExchangeBank),
            BankKind::Variable => {
                let bank = VariableExchangeBank::new();
                for rate in &config.bank.rates {
                    bank.add_rate(rate.from.clone(), rate.to.clone(), rate.rate);
                }
                Arc::new(bank)
            }
        };
        debug!(
            default_currency = %config.default_currency,
            bank = ?config.bank.kind,
            rates = config.bank.rates.len(),
            "Money context configured"
        );
        Self::new(config.default_currency.clone(), bank)
    }

    /// Replaces the default currency.
    #[must_use]
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Replaces the bank.
    #[must_use]
    pub fn with_bank(mut self, bank: Arc<dyn Bank>) -> Self {
        self.bank = bank;
        self
    }

    /// The currency given to amounts created without one.
    #[must_use]
    pub fn default_currency(&self) -> &Currency {
        &self.default_currency
    }

    /// The active bank.
    #[must_use]
    pub fn bank(&self) -> &dyn Bank {
        self.bank.as_ref()
    }

    /// Creates an amount in the default currency.
    #[must_use]
    pub fn money(&self, cents: i64) -> Money {
        Money::new(cents, self.default_currency.clone())
    }

    /// Zero in the default currency.
    #[must_use]
    pub fn empty(&self) -> Money {
        Money::empty(self.default_currency.clone())
    }
}

impl Default for MoneyContext {
    fn default() -> Self {
        Self::new(Currency::default(), Arc::new(NoExchangeBank))
    }
}
