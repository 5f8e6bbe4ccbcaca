//! Bank that never converts.

use centavo_shared::{Currency, MoneyError, MoneyResult};
use tracing::debug;

use super::Bank;

/// Rejects any conversion between two different currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoExchangeBank;

impl Bank for NoExchangeBank {
    fn exchange(&self, cents: i64, from: &Currency, to: &Currency) -> MoneyResult<i64> {
        if from == to {
            return Ok(cents);
        }
        debug!(%from, %to, "Exchange refused: no exchange bank installed");
        Err(MoneyError::no_exchange_rate(from, to))
    }
}
