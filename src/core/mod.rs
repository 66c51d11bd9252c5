pub mod counter;
pub mod logging;
pub mod onboarding;
pub mod signup;
pub mod sink;
