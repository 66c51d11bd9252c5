use serde::{Deserialize, Serialize};

use crate::core::onboarding::UserData;
use crate::core::signup::SignupData;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// An onboarding run was confirmed on its final step.
    OnboardingCompleted(UserData),
    /// The sign-up form passed validation.
    SignedUp(SignupData),
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusOnboarding,
    FocusSignUp,
    FocusCounter,
    PageNext,
    PagePrev,

    // Modals
    ToggleHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Which page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Onboarding,
    SignUp,
    Counter,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Onboarding, Page::SignUp, Page::Counter];

    pub fn label(self) -> &'static str {
        match self {
            Page::Onboarding => "Onboarding",
            Page::SignUp => "Sign Up",
            Page::Counter => "Counter",
        }
    }

    /// Function key that jumps to this page.
    pub fn hotkey(self) -> &'static str {
        match self {
            Page::Onboarding => "F1",
            Page::SignUp => "F2",
            Page::Counter => "F3",
        }
    }

    pub fn to_action(self) -> Action {
        match self {
            Page::Onboarding => Action::FocusOnboarding,
            Page::SignUp => Action::FocusSignUp,
            Page::Counter => Action::FocusCounter,
        }
    }

    pub fn next(self) -> Page {
        let idx = Page::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Page::ALL[(idx + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Page {
        let idx = Page::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Page::ALL[(idx + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
