//! Counter slice: state, actions and a pure reducer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    IncrementByAmount(i64),
    /// Adds the amount only when the current value is odd.
    IncrementIfOdd(i64),
}

/// Apply one action. Arithmetic saturates at the i64 bounds.
pub fn reduce(state: CounterState, action: CounterAction) -> CounterState {
    let value = match action {
        CounterAction::Increment => state.value.saturating_add(1),
        CounterAction::Decrement => state.value.saturating_sub(1),
        CounterAction::IncrementByAmount(n) => state.value.saturating_add(n),
        CounterAction::IncrementIfOdd(n) if state.value % 2 != 0 => state.value.saturating_add(n),
        CounterAction::IncrementIfOdd(_) => state.value,
    };
    CounterState { value }
}

pub fn select_count(state: &CounterState) -> i64 {
    state.value
}

/// Amount typed into the increment box; anything unparseable is zero.
pub fn parse_amount(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}
