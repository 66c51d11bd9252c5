//! Cross-module tests for the onboarding demo.
//!
//! Unit tests living next to their module cover single functions; the
//! suites here drive whole flows and check invariants over generated input.

mod property;
mod unit;
