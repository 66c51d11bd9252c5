//! Property-based tests for sign-up validation
//!
//! Tests invariants:
//! - Any blank field rejects the form without emitting
//! - Passwords shorter than the minimum are rejected
//! - Valid input emits exactly once and clears the form

use proptest::prelude::*;

use crate::core::signup::{SignupData, SignupError, SignupField, SignupForm};
use crate::core::sink::MockCompletionSink;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,20}"
}

fn arb_email() -> impl Strategy<Value = String> {
    "[a-z]{1,10}@[a-z]{1,10}\\.com"
}

fn arb_password(min: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>().prop_filter("non-control", |c| !c.is_control()), min..min + 20)
        .prop_map(|chars| chars.into_iter().collect())
}

fn filled(first: &str, last: &str, email: &str, password: &str) -> SignupForm {
    let mut form = SignupForm::default();
    form.set_field(SignupField::FirstName, first);
    form.set_field(SignupField::LastName, last);
    form.set_field(SignupField::Email, email);
    form.set_field(SignupField::Password, password);
    form
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: A blank field always yields "All fields are required"
    #[test]
    fn prop_blank_field_rejected(
        blank in prop::sample::select(SignupField::ALL.to_vec()),
        first in arb_name(),
        last in arb_name(),
        email in arb_email(),
    ) {
        let mut sink = MockCompletionSink::new();
        sink.expect_emit().times(0);

        let mut form = filled(&first, &last, &email, "longenough");
        form.set_field(blank, "");

        prop_assert_eq!(form.submit(&sink), Err(SignupError::MissingFields));
        prop_assert_eq!(form.error(), Some("All fields are required"));
    }

    /// Property: Passwords under the minimum are rejected
    #[test]
    fn prop_short_password_rejected(
        min in 1usize..16,
        password in "[a-z]{1,15}",
    ) {
        prop_assume!(password.chars().count() < min);
        let mut sink = MockCompletionSink::new();
        sink.expect_emit().times(0);

        let mut form = SignupForm::new(min);
        for field in SignupField::ALL {
            form.set_field(field, if field == SignupField::Password { password.as_str() } else { "x" });
        }

        prop_assert_eq!(form.submit(&sink), Err(SignupError::PasswordTooShort { min }));
        prop_assert_eq!(form.field(SignupField::Password), password.as_str());
    }

    /// Property: Valid input emits once and leaves the form empty
    #[test]
    fn prop_valid_form_emits_once(
        first in arb_name(),
        last in arb_name(),
        email in arb_email(),
        password in arb_password(8),
    ) {
        let expected_email = email.clone();
        let mut sink = MockCompletionSink::new();
        sink.expect_emit()
            .withf(move |d: &SignupData| d.email == expected_email)
            .times(1)
            .return_const(());

        let mut form = filled(&first, &last, &email, &password);
        let data = form.submit(&sink);

        prop_assert!(data.is_ok());
        prop_assert_eq!(form.error(), None);
        for field in SignupField::ALL {
            prop_assert_eq!(form.field(field), "");
        }
    }
}
