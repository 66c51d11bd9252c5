//! Outbound reporting for completed forms.
//!
//! Nothing is persisted: a finished onboarding run or sign-up is handed to a
//! [`CompletionSink`] and forgotten. The sink cannot fail from the caller's
//! point of view.

use serde::Serialize;

/// Receives a completed record exactly once per completion.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionSink<T: 'static> {
    fn emit(&self, record: &T);
}

/// Writes each record to the log as JSON under a fixed event name.
#[derive(Debug, Clone)]
pub struct LogSink {
    event: &'static str,
}

impl LogSink {
    pub fn new(event: &'static str) -> Self {
        Self { event }
    }
}

impl<T: Serialize + 'static> CompletionSink<T> for LogSink {
    fn emit(&self, record: &T) {
        match serde_json::to_string(record) {
            Ok(json) => tracing::info!(event = self.event, record = %json, "{}", self.event),
            Err(e) => log::error!("Failed to serialize {} record: {e}", self.event),
        }
    }
}
