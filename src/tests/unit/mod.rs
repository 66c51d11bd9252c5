//! Unit Tests
//!
//! Table-driven checks of the wizard and end-to-end flows through the
//! views and the event channel.

mod onboarding_flow_tests;
mod signup_flow_tests;
mod wizard_tests;
