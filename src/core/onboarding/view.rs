//! Step renderer: what each wizard step shows, as plain data.
//!
//! Steps 1-3 list their fields with current values; step 4 lists the
//! confirmation summary. Drawing lives in the TUI layer.

use super::state::WizardState;
use super::types::{FieldKind, OnboardingStep, UserField};

/// One editable field as it should appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub field: UserField,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: &'a str,
}

impl<'a> FieldView<'a> {
    fn of(state: &'a WizardState, field: UserField) -> Self {
        Self {
            field,
            label: field.label(),
            kind: field.kind(),
            value: state.field(field),
        }
    }

    /// Text to show: the choice label for select/radio values, raw text otherwise.
    pub fn display_value(&self) -> &'a str {
        self.kind
            .choices()
            .iter()
            .find(|c| c.value == self.value)
            .map_or(self.value, |c| c.label)
    }
}

/// A labelled line on the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

pub const CONFIRM_HEADING: &str = "Please confirm your information:";
pub const PRODUCT_PROMPT: &str = "Which product are you most interested in?";

/// What the current step shows, one variant per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepView<'a> {
    PersonalInfo(Vec<FieldView<'a>>),
    CompanyDetails(Vec<FieldView<'a>>),
    ProductPreferences(Vec<FieldView<'a>>),
    Confirmation(Vec<SummaryRow>),
}

impl<'a> StepView<'a> {
    pub fn step(&self) -> OnboardingStep {
        match self {
            StepView::PersonalInfo(_) => OnboardingStep::PersonalInfo,
            StepView::CompanyDetails(_) => OnboardingStep::CompanyDetails,
            StepView::ProductPreferences(_) => OnboardingStep::ProductPreferences,
            StepView::Confirmation(_) => OnboardingStep::Confirmation,
        }
    }

    /// Editable fields; empty on the confirmation step.
    pub fn fields(&self) -> &[FieldView<'a>] {
        match self {
            StepView::PersonalInfo(f)
            | StepView::CompanyDetails(f)
            | StepView::ProductPreferences(f) => f,
            StepView::Confirmation(_) => &[],
        }
    }
}

fn step_fields(state: &WizardState) -> Vec<FieldView<'_>> {
    state
        .step()
        .fields()
        .iter()
        .map(|&f| FieldView::of(state, f))
        .collect()
}

/// Map the current step to its view. Pure; reads the form state only.
pub fn render_step(state: &WizardState) -> StepView<'_> {
    match state.step() {
        OnboardingStep::PersonalInfo => StepView::PersonalInfo(step_fields(state)),
        OnboardingStep::CompanyDetails => StepView::CompanyDetails(step_fields(state)),
        OnboardingStep::ProductPreferences => StepView::ProductPreferences(step_fields(state)),
        OnboardingStep::Confirmation => {
            let data = state.data();
            let row = |label, value: &str| SummaryRow {
                label,
                value: value.to_string(),
            };
            StepView::Confirmation(vec![
                row("Name", &data.full_name()),
                row("Email", &data.email),
                row("Company", &data.company_name),
                row("Company Size", &data.company_size),
                row("Industry", &data.industry),
                row("Product Interest", &data.product_interest),
            ])
        }
    }
}
