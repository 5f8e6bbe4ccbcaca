//! Money error types.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money operations.
///
/// Constructing a `Money` never fails; these only surface when an
/// operation actually needs a conversion, a division or a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The active bank cannot convert between the two currencies.
    #[error("No exchange rate known from {from} to {to}")]
    NoExchangeRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// Division of an amount by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit in the cent range.
    #[error("Amount overflow")]
    Overflow,

    /// Input could not be read as an amount.
    #[error("Cannot parse money: {0}")]
    Parse(String),
}

impl MoneyError {
    /// Shorthand for a missing exchange rate.
    #[must_use]
    pub fn no_exchange_rate(from: &Currency, to: &Currency) -> Self {
        Self::NoExchangeRate {
            from: from.clone(),
            to: to.clone(),
        }
    }

    /// Returns true if this error comes from a failed currency exchange.
    #[must_use]
    pub const fn is_exchange(&self) -> bool {
        matches!(self, Self::NoExchangeRate { .. })
    }

    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoExchangeRate { .. } => "NO_EXCHANGE_RATE",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::Parse(_) => "PARSE_ERROR",
        }
    }
}
