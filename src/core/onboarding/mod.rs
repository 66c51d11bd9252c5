//! Onboarding Wizard State Machine
//!
//! Drives the four-step SaaS onboarding flow:
//! 1. Personal Info - first name, last name, email
//! 2. Company Details - company name, size, industry
//! 3. Product Preferences - product of interest
//! 4. Confirmation - review, then complete
//!
//! # Design Principles
//!
//! - **Linear**: `advance`/`retreat` move one step and clamp at the ends
//! - **Ungated**: no field is required to move forward
//! - **Ephemeral**: state lives for one run; completion hands the data to a
//!   [`CompletionSink`](crate::core::sink::CompletionSink) and starts over

mod state;
mod types;
mod view;

pub use state::*;
pub use types::*;
pub use view::*;
