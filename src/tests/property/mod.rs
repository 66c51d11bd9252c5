//! Property-based tests
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `wizard_props`: step navigation and field edits of the onboarding wizard
//!   - Step always stays within 1..=4
//!   - Advance and retreat clamp instead of wrapping
//!   - Editing one field never touches another
//!
//! - `signup_props`: sign-up validation
//!   - Any blank field rejects the form without emitting
//!   - Short passwords are rejected with the configured minimum
//!   - Valid forms emit exactly once and clear
//!
//! - `counter_props`: the counter reducer
//!   - Increment then decrement is the identity
//!   - Add-if-odd is a no-op on even values
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod counter_props;
mod signup_props;
mod wizard_props;
