//! Property-based tests for the onboarding wizard
//!
//! Tests invariants:
//! - Step always stays within 1..=4 after any navigation sequence
//! - Advance and retreat clamp at the ends
//! - Setting a field leaves every other field untouched
//! - Completion is only possible from the confirmation step

use proptest::prelude::*;

use crate::core::onboarding::{OnboardingStep, UserField, WizardError, WizardState};
use crate::core::sink::MockCompletionSink;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Nav {
    Next,
    Previous,
}

fn arb_nav() -> impl Strategy<Value = Nav> {
    prop_oneof![Just(Nav::Next), Just(Nav::Previous)]
}

fn arb_field() -> impl Strategy<Value = UserField> {
    prop::sample::select(UserField::ALL.to_vec())
}

/// Wizard already moved to the given step number.
fn wizard_at(step: u8) -> WizardState {
    let mut wizard = WizardState::new();
    for _ in 1..step {
        wizard.advance();
    }
    wizard
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: Step number stays in range for any navigation sequence
    #[test]
    fn prop_step_stays_in_range(navs in prop::collection::vec(arb_nav(), 0..50)) {
        let mut wizard = WizardState::new();
        for nav in navs {
            match nav {
                Nav::Next => wizard.advance(),
                Nav::Previous => wizard.retreat(),
            };
            prop_assert!((1..=OnboardingStep::COUNT).contains(&wizard.step_number()));
        }
    }

    /// Property: Advance is min(step + 1, 4)
    #[test]
    fn prop_advance_clamps(step in 1u8..=4) {
        let mut wizard = wizard_at(step);
        wizard.advance();
        prop_assert_eq!(wizard.step_number(), (step + 1).min(4));
    }

    /// Property: Retreat is max(step - 1, 1)
    #[test]
    fn prop_retreat_clamps(step in 1u8..=4) {
        let mut wizard = wizard_at(step);
        wizard.retreat();
        prop_assert_eq!(wizard.step_number(), (step - 1).max(1));
    }

    /// Property: Setting one field never changes another or the step
    #[test]
    fn prop_set_field_is_isolated(
        step in 1u8..=4,
        field in arb_field(),
        value in "\\PC{0,40}",
    ) {
        let mut wizard = wizard_at(step);
        let before = wizard.data().clone();
        wizard.set_field(field, value.clone());

        prop_assert_eq!(wizard.field(field), value.as_str());
        prop_assert_eq!(wizard.step_number(), step);
        for other in UserField::ALL.into_iter().filter(|f| *f != field) {
            prop_assert_eq!(wizard.field(other), before.get(other));
        }
    }

    /// Property: Field values survive navigation in both directions
    #[test]
    fn prop_values_survive_navigation(
        value in "[a-zA-Z0-9@. ]{1,30}",
        navs in prop::collection::vec(arb_nav(), 0..20),
    ) {
        let mut wizard = WizardState::new();
        wizard.set_field(UserField::CompanyName, value.clone());
        for nav in navs {
            match nav {
                Nav::Next => wizard.advance(),
                Nav::Previous => wizard.retreat(),
            };
        }
        prop_assert_eq!(wizard.field(UserField::CompanyName), value.as_str());
    }

    /// Property: Completing before the last step fails and emits nothing
    #[test]
    fn prop_complete_requires_confirmation(step in 1u8..=3) {
        let mut sink = MockCompletionSink::new();
        sink.expect_emit().times(0);
        let mut wizard = wizard_at(step);

        prop_assert_eq!(wizard.complete(&sink), Err(WizardError::NotAtConfirmation(step)));
        prop_assert_eq!(wizard.step_number(), step);
    }
}
