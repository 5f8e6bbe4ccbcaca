//! Property-based tests for money operations.
//!
//! - Property 1: Add/subtract round-trip in one currency
//! - Property 2: Multiply floors, divide truncates
//! - Property 3: Same-currency ordering follows cents

use std::cmp::Ordering;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::Money;
use crate::bank::NoExchangeBank;

/// Strategy to generate cent amounts (-10,000,000.00 to 10,000,000.00).
fn cents() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy to generate scalar factors (0.0001 to 1000.0000).
fn factor() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* a, b in the same currency, (a + b) - b == a.
    #[test]
    fn prop_add_then_subtract_is_identity(a in cents(), b in cents()) {
        let bank = NoExchangeBank;
        let a = Money::ca_dollar(a);
        let b = Money::ca_dollar(b);

        let result = a.add(&b, &bank).and_then(|sum| sum.subtract(&b, &bank)).unwrap();
        prop_assert_eq!(result, a);
    }

    /// *For any* amount and factor, multiply returns floor(cents * factor).
    #[test]
    fn prop_multiply_floors(amount in cents(), k in factor()) {
        let result = Money::ca_dollar(amount).multiply(k).unwrap();
        let exact = Decimal::from(amount) * k;

        prop_assert!(Decimal::from(result.cents()) <= exact);
        prop_assert!(exact - Decimal::from(result.cents()) < Decimal::ONE);
    }

    /// *For any* amount and factor, divide truncates toward zero.
    #[test]
    fn prop_divide_truncates(amount in cents(), k in factor()) {
        let result = Money::ca_dollar(amount).divide(k).unwrap();
        let expected = (Decimal::from(amount) / k).trunc().to_i64().unwrap();

        prop_assert_eq!(result.cents(), expected);
    }

    /// *For any* list of amounts in one currency, sorting orders by cents.
    #[test]
    fn prop_sort_orders_by_cents(values in prop::collection::vec(cents(), 0..50)) {
        let mut money: Vec<Money> = values.iter().copied().map(Money::ca_dollar).collect();
        money.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mut sorted = values;
        sorted.sort_unstable();
        let cents: Vec<i64> = money.iter().map(Money::cents).collect();
        prop_assert_eq!(cents, sorted);
    }

    /// *For any* two amounts in one currency, compare agrees with cents.
    #[test]
    fn prop_compare_matches_cents(a in cents(), b in cents()) {
        let ordering = Money::ca_dollar(a).compare(&Money::ca_dollar(b), &NoExchangeBank).unwrap();
        prop_assert_eq!(ordering, a.cmp(&b));
    }
}
