//! Adapters turning native numbers and strings into money.

use centavo_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::prelude::*;

use super::value::Money;
use crate::context::MoneyContext;

/// Conversion of a native value into `Money`.
///
/// Numbers are read as dollars in the context's default currency.
pub trait ToMoney {
    /// Converts `self` into a money value.
    fn to_money(&self, ctx: &MoneyContext) -> MoneyResult<Money>;
}

impl ToMoney for i64 {
    fn to_money(&self, ctx: &MoneyContext) -> MoneyResult<Money> {
        let cents = self.checked_mul(100).ok_or(MoneyError::Overflow)?;
        Ok(ctx.money(cents))
    }
}

impl ToMoney for i32 {
    fn to_money(&self, ctx: &MoneyContext) -> MoneyResult<Money> {
        i64::from(*self).to_money(ctx)
    }
}

impl ToMoney for Decimal {
    fn to_money(&self, ctx: &MoneyContext) -> MoneyResult<Money> {
        Ok(ctx.money(dollars_to_cents(*self)?))
    }
}

impl ToMoney for str {
    fn to_money(&self, ctx: &MoneyContext) -> MoneyResult<Money> {
        Money::parse(self, ctx.default_currency())
    }
}

impl ToMoney for String {
    fn to_money(&self, ctx: &MoneyContext) -> MoneyResult<Money> {
        self.as_str().to_money(ctx)
    }
}

impl<T: ToMoney + ?Sized> ToMoney for &T {
    fn to_money(&self, ctx: &MoneyContext) -> MoneyResult<Money> {
        (**self).to_money(ctx)
    }
}

impl<T: ToMoney> ToMoney for Option<T> {
    fn to_money(&self, ctx: &MoneyContext) -> MoneyResult<Money> {
        match self {
            Some(value) => value.to_money(ctx),
            None => Ok(ctx.empty()),
        }
    }
}

impl Money {
    /// Parses strings such as `"$1.37"`, `"-100"` or `"CAD $1.00"`.
    ///
    /// A three-letter uppercase code anywhere in the input selects the
    /// currency; otherwise `default_currency` is used. `$` signs and `,`
    /// separators are ignored. Exactly one amount must be present.
    pub fn parse(input: &str, default_currency: &Currency) -> MoneyResult<Self> {
        let mut currency = None;
        let mut amount: Option<String> = None;

        for token in input.split_whitespace() {
            if is_currency_code(token) {
                if currency.is_some() {
                    return Err(MoneyError::Parse(format!("more than one currency in {input:?}")));
                }
                currency = Some(Currency::new(token));
            } else {
                let cleaned: String = token.chars().filter(|c| !matches!(c, '$' | ',')).collect();
                if cleaned.is_empty() {
                    continue;
                }
                if amount.is_some() {
                    return Err(MoneyError::Parse(format!("more than one amount in {input:?}")));
                }
                amount = Some(cleaned);
            }
        }

        let Some(amount) = amount else {
            return Err(MoneyError::Parse(format!("no amount in {input:?}")));
        };

        let dollars = Decimal::from_str(&amount)
            .map_err(|e| MoneyError::Parse(format!("{input:?}: {e}")))?;
        let currency = currency.unwrap_or_else(|| default_currency.clone());

        Ok(Self::new(dollars_to_cents(dollars)?, currency))
    }
}

fn is_currency_code(token: &str) -> bool {
    token.len() == 3 && token.chars().all(|c| c.is_ascii_uppercase())
}

fn dollars_to_cents(dollars: Decimal) -> MoneyResult<i64> {
    dollars
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(MoneyError::Overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or(MoneyError::Overflow)
}
