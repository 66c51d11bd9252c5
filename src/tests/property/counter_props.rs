//! Property-based tests for the counter reducer
//!
//! Tests invariants:
//! - Increment then decrement returns to the start
//! - Add-if-odd does nothing on even values
//! - Add-by-amount matches plain addition away from the bounds

use proptest::prelude::*;

use crate::core::counter::{reduce, CounterAction, CounterState};

proptest! {
    /// Property: Increment followed by decrement is the identity
    #[test]
    fn prop_increment_decrement_identity(value in -1_000_000i64..1_000_000) {
        let start = CounterState { value };
        let end = reduce(reduce(start, CounterAction::Increment), CounterAction::Decrement);
        prop_assert_eq!(end, start);
    }

    /// Property: Add-if-odd is a no-op on even values
    #[test]
    fn prop_if_odd_skips_even(half in -1_000_000i64..1_000_000, amount in any::<i64>()) {
        let start = CounterState { value: half * 2 };
        prop_assert_eq!(reduce(start, CounterAction::IncrementIfOdd(amount)), start);
    }

    /// Property: Add-by-amount is addition
    #[test]
    fn prop_increment_by_amount_adds(
        value in -1_000_000i64..1_000_000,
        amount in -1_000_000i64..1_000_000,
    ) {
        let end = reduce(CounterState { value }, CounterAction::IncrementByAmount(amount));
        prop_assert_eq!(end.value, value + amount);
    }

    /// Property: Arithmetic never overflows
    #[test]
    fn prop_never_overflows(value in any::<i64>(), amount in any::<i64>()) {
        let end = reduce(CounterState { value }, CounterAction::IncrementByAmount(amount));
        prop_assert_eq!(end.value, value.saturating_add(amount));
    }
}
