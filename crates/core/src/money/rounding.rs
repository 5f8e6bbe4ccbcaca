//! Cent scaling rules.
//!
//! CRITICAL: the two directions round differently and callers rely on it:
//! - Scaling up (multiply, exchange) floors toward negative infinity
//! - Dividing truncates toward zero, like integer division
//!
//! All math runs on `Decimal`, never on floats.

use centavo_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Scales `cents` by `factor`, flooring the result.
pub fn scale_floor(cents: i64, factor: Decimal) -> MoneyResult<i64> {
    Decimal::from(cents)
        .checked_mul(factor)
        .ok_or(MoneyError::Overflow)?
        .floor()
        .to_i64()
        .ok_or(MoneyError::Overflow)
}

/// Divides `cents` by `divisor`, truncating toward zero.
pub fn divide_truncate(cents: i64, divisor: Decimal) -> MoneyResult<i64> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    Decimal::from(cents)
        .checked_div(divisor)
        .ok_or(MoneyError::Overflow)?
        .trunc()
        .to_i64()
        .ok_or(MoneyError::Overflow)
}
