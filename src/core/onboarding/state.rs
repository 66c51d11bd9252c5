use serde::{Deserialize, Serialize};

use super::types::{OnboardingStep, UserData, UserField, WizardError};
use crate::core::sink::CompletionSink;

/// Step controller plus form store for a single onboarding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    step: OnboardingStep,
    data: UserData,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh run: step 1, every field empty.
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::PersonalInfo,
            data: UserData::default(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// 1-based step index, always within 1..=4.
    pub fn step_number(&self) -> u8 {
        self.step.number()
    }

    pub fn data(&self) -> &UserData {
        &self.data
    }

    pub fn field(&self, field: UserField) -> &str {
        self.data.get(field)
    }

    /// Header line, e.g. "SaaS Onboarding - Step 2 of 4".
    pub fn header(&self) -> String {
        format!(
            "SaaS Onboarding - Step {} of {}",
            self.step.number(),
            OnboardingStep::COUNT
        )
    }

    // ── Step controller ─────────────────────────────────────────────────

    /// Move forward one step; stays put on the last step. No validation gate.
    pub fn advance(&mut self) -> OnboardingStep {
        if let Some(next) = self.step.next() {
            log::debug!("Onboarding step {} -> {}", self.step.number(), next.number());
            self.step = next;
        }
        self.step
    }

    /// Move back one step; stays put on the first step.
    pub fn retreat(&mut self) -> OnboardingStep {
        if let Some(prev) = self.step.previous() {
            log::debug!("Onboarding step {} -> {}", self.step.number(), prev.number());
            self.step = prev;
        }
        self.step
    }

    pub fn can_retreat(&self) -> bool {
        !self.step.is_first()
    }

    pub fn can_advance(&self) -> bool {
        !self.step.is_last()
    }

    // ── Form store ──────────────────────────────────────────────────────

    /// Overwrite one field. Raw text, no validation.
    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// [`set_field`](Self::set_field) addressed by form key (`"companyName"`).
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), WizardError> {
        let field: UserField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    // ── Completion ──────────────────────────────────────────────────────

    /// Confirm the run from the final step.
    ///
    /// Emits the collected data to `sink` once, returns it, and resets to a
    /// fresh run. Fails without emitting when not on the confirmation step.
    pub fn complete<S>(&mut self, sink: &S) -> Result<UserData, WizardError>
    where
        S: CompletionSink<UserData> + ?Sized,
    {
        if !self.step.is_last() {
            return Err(WizardError::NotAtConfirmation(self.step.number()));
        }

        let data = std::mem::take(self).data;
        sink.emit(&data);
        log::info!("Onboarding run completed for {}", data.email);
        Ok(data)
    }
}
