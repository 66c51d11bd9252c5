pub mod counter;
pub mod onboarding;
pub mod sign_up;
