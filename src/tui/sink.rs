//! Completion sink that feeds finished forms back into the event loop.

use tokio::sync::mpsc;

use super::events::AppEvent;
use crate::core::onboarding::UserData;
use crate::core::signup::SignupData;
use crate::core::sink::CompletionSink;

/// Posts completed records onto the app's event channel.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventSink {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: AppEvent) {
        // Receiver only drops on shutdown; nothing left to notify then.
        if self.tx.send(event).is_err() {
            log::debug!("Event channel closed, dropping completion");
        }
    }
}

impl CompletionSink<UserData> for EventSink {
    fn emit(&self, record: &UserData) {
        self.send(AppEvent::OnboardingCompleted(record.clone()));
    }
}

impl CompletionSink<SignupData> for EventSink {
    fn emit(&self, record: &SignupData) {
        self.send(AppEvent::SignedUp(record.clone()));
    }
}
