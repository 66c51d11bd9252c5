/// SaaS Onboarding - terminal demo of an onboarding wizard, a sign-up
/// form and a counter widget.
///
/// The form logic lives in [`core`] and is UI-agnostic; [`tui`] wires it
/// into a ratatui event loop.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
