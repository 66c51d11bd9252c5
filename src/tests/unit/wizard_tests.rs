//! Wizard Step Tests
//!
//! Step numbering, navigation tables and field lookup by name.

use rstest::rstest;

use crate::core::onboarding::{render_step, OnboardingStep, StepView, UserField, WizardError, WizardState};

fn wizard_at(step: u8) -> WizardState {
    let mut wizard = WizardState::new();
    for _ in 1..step {
        wizard.advance();
    }
    wizard
}

// =============================================================================
// Navigation
// =============================================================================

#[rstest]
#[case(1, 2)]
#[case(2, 3)]
#[case(3, 4)]
#[case(4, 4)]
fn test_next_step(#[case] from: u8, #[case] to: u8) {
    let mut wizard = wizard_at(from);
    assert_eq!(wizard.advance().number(), to);
}

#[rstest]
#[case(1, 1)]
#[case(2, 1)]
#[case(3, 2)]
#[case(4, 3)]
fn test_previous_step(#[case] from: u8, #[case] to: u8) {
    let mut wizard = wizard_at(from);
    assert_eq!(wizard.retreat().number(), to);
}

#[rstest]
#[case(1, "SaaS Onboarding - Step 1 of 4")]
#[case(3, "SaaS Onboarding - Step 3 of 4")]
fn test_header(#[case] step: u8, #[case] expected: &str) {
    assert_eq!(wizard_at(step).header(), expected);
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(255)]
fn test_step_number_out_of_range(#[case] n: u8) {
    assert_eq!(OnboardingStep::from_number(n), Err(WizardError::StepOutOfRange(n)));
}

// =============================================================================
// Fields
// =============================================================================

#[rstest]
#[case("firstName", UserField::FirstName)]
#[case("companySize", UserField::CompanySize)]
#[case("productInterest", UserField::ProductInterest)]
fn test_set_field_by_name(#[case] name: &str, #[case] field: UserField) {
    let mut wizard = WizardState::new();
    wizard.set_field_by_name(name, "value").unwrap();
    assert_eq!(wizard.field(field), "value");
}

#[test]
fn test_unknown_field_name_is_rejected() {
    let mut wizard = WizardState::new();
    let before = wizard.data().clone();
    assert_eq!(
        wizard.set_field_by_name("favouriteColour", "blue"),
        Err(WizardError::UnknownField("favouriteColour".to_string()))
    );
    assert_eq!(wizard.data(), &before);
}

#[rstest]
#[case(1, 3)]
#[case(2, 3)]
#[case(3, 1)]
fn test_rendered_field_count(#[case] step: u8, #[case] count: usize) {
    let wizard = wizard_at(step);
    assert_eq!(render_step(&wizard).fields().len(), count);
}

#[test]
fn test_confirmation_summary_uses_entered_values() {
    let mut wizard = wizard_at(4);
    wizard.set_field(UserField::FirstName, "Ada");
    wizard.set_field(UserField::LastName, "Lovelace");
    wizard.set_field(UserField::Industry, "finance");

    let StepView::Confirmation(rows) = render_step(&wizard) else {
        panic!("expected confirmation view");
    };
    assert_eq!(rows[0].value, "Ada Lovelace");
    assert!(rows.iter().any(|r| r.label == "Industry" && r.value == "finance"));
}
