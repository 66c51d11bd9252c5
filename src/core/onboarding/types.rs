//! Onboarding Domain Types
//!
//! Defines the core domain types for the onboarding wizard:
//! - [`UserData`]: Accumulating record filled in across the steps
//! - [`UserField`]: The named fields of that record
//! - [`OnboardingStep`]: The fixed four-step sequence
//! - [`WizardError`]: Error types for wizard operations
//!
//! # Serialization
//!
//! [`UserData`] serializes with the camelCase field keys used throughout the
//! form (`firstName`, `companySize`, ...), which is also the shape written to
//! the log when a run completes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// User Data
// ============================================================================

/// Everything collected by one onboarding run.
///
/// All fields are plain text and may be empty until the run is completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
    pub company_size: String,
    pub industry: String,
    pub product_interest: String,
}

impl UserData {
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::CompanyName => &self.company_name,
            UserField::CompanySize => &self.company_size,
            UserField::Industry => &self.industry,
            UserField::ProductInterest => &self.product_interest,
        }
    }

    fn slot_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::CompanyName => &mut self.company_name,
            UserField::CompanySize => &mut self.company_size,
            UserField::Industry => &mut self.industry,
            UserField::ProductInterest => &mut self.product_interest,
        }
    }

    /// Overwrite a single field, leaving the rest untouched.
    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Display name as shown on the confirmation step.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ============================================================================
// Fields
// ============================================================================

/// A selectable option for select and radio fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

pub const COMPANY_SIZES: &[Choice] = &[
    Choice { value: "1-10", label: "1-10 employees" },
    Choice { value: "11-50", label: "11-50 employees" },
    Choice { value: "51-200", label: "51-200 employees" },
    Choice { value: "201-500", label: "201-500 employees" },
    Choice { value: "500+", label: "500+ employees" },
];

pub const INDUSTRIES: &[Choice] = &[
    Choice { value: "technology", label: "Technology" },
    Choice { value: "finance", label: "Finance" },
    Choice { value: "healthcare", label: "Healthcare" },
    Choice { value: "education", label: "Education" },
    Choice { value: "other", label: "Other" },
];

pub const PRODUCTS: &[Choice] = &[
    Choice { value: "productA", label: "Product A" },
    Choice { value: "productB", label: "Product B" },
    Choice { value: "productC", label: "Product C" },
];

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Drop-down with a placeholder shown while empty.
    Select {
        choices: &'static [Choice],
        placeholder: &'static str,
    },
    /// Radio group; exactly one choice once picked.
    Radio { choices: &'static [Choice] },
}

impl FieldKind {
    pub fn choices(self) -> &'static [Choice] {
        match self {
            FieldKind::Text => &[],
            FieldKind::Select { choices, .. } | FieldKind::Radio { choices } => choices,
        }
    }
}

/// Named fields of [`UserData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    CompanyName,
    CompanySize,
    Industry,
    ProductInterest,
}

impl UserField {
    pub const ALL: [UserField; 7] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::CompanyName,
        UserField::CompanySize,
        UserField::Industry,
        UserField::ProductInterest,
    ];

    /// Form key, e.g. `firstName`.
    pub fn key(self) -> &'static str {
        match self {
            UserField::FirstName => "firstName",
            UserField::LastName => "lastName",
            UserField::Email => "email",
            UserField::CompanyName => "companyName",
            UserField::CompanySize => "companySize",
            UserField::Industry => "industry",
            UserField::ProductInterest => "productInterest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserField::FirstName => "First Name",
            UserField::LastName => "Last Name",
            UserField::Email => "Email",
            UserField::CompanyName => "Company Name",
            UserField::CompanySize => "Company Size",
            UserField::Industry => "Industry",
            UserField::ProductInterest => "Product Interest",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            UserField::CompanySize => FieldKind::Select {
                choices: COMPANY_SIZES,
                placeholder: "Select company size",
            },
            UserField::Industry => FieldKind::Select {
                choices: INDUSTRIES,
                placeholder: "Select industry",
            },
            UserField::ProductInterest => FieldKind::Radio { choices: PRODUCTS },
            _ => FieldKind::Text,
        }
    }

    /// The step on which this field is edited.
    pub fn step(self) -> OnboardingStep {
        match self {
            UserField::FirstName | UserField::LastName | UserField::Email => {
                OnboardingStep::PersonalInfo
            }
            UserField::CompanyName | UserField::CompanySize | UserField::Industry => {
                OnboardingStep::CompanyDetails
            }
            UserField::ProductInterest => OnboardingStep::ProductPreferences,
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for UserField {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| WizardError::UnknownField(s.to_string()))
    }
}

// ============================================================================
// Steps
// ============================================================================

/// The fixed onboarding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    PersonalInfo,
    CompanyDetails,
    ProductPreferences,
    Confirmation,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::PersonalInfo,
        OnboardingStep::CompanyDetails,
        OnboardingStep::ProductPreferences,
        OnboardingStep::Confirmation,
    ];

    pub const COUNT: u8 = 4;

    /// 1-based position in the sequence.
    pub fn number(self) -> u8 {
        match self {
            OnboardingStep::PersonalInfo => 1,
            OnboardingStep::CompanyDetails => 2,
            OnboardingStep::ProductPreferences => 3,
            OnboardingStep::Confirmation => 4,
        }
    }

    pub fn from_number(n: u8) -> Result<Self, WizardError> {
        match n {
            1 => Ok(OnboardingStep::PersonalInfo),
            2 => Ok(OnboardingStep::CompanyDetails),
            3 => Ok(OnboardingStep::ProductPreferences),
            4 => Ok(OnboardingStep::Confirmation),
            other => Err(WizardError::StepOutOfRange(other)),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::PersonalInfo => "Personal Info",
            OnboardingStep::CompanyDetails => "Company Details",
            OnboardingStep::ProductPreferences => "Product Preferences",
            OnboardingStep::Confirmation => "Confirmation",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            OnboardingStep::PersonalInfo => Some(OnboardingStep::CompanyDetails),
            OnboardingStep::CompanyDetails => Some(OnboardingStep::ProductPreferences),
            OnboardingStep::ProductPreferences => Some(OnboardingStep::Confirmation),
            OnboardingStep::Confirmation => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            OnboardingStep::PersonalInfo => None,
            OnboardingStep::CompanyDetails => Some(OnboardingStep::PersonalInfo),
            OnboardingStep::ProductPreferences => Some(OnboardingStep::CompanyDetails),
            OnboardingStep::Confirmation => Some(OnboardingStep::ProductPreferences),
        }
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Fields edited on this step, in display order.
    pub fn fields(self) -> &'static [UserField] {
        match self {
            OnboardingStep::PersonalInfo => {
                &[UserField::FirstName, UserField::LastName, UserField::Email]
            }
            OnboardingStep::CompanyDetails => &[
                UserField::CompanyName,
                UserField::CompanySize,
                UserField::Industry,
            ],
            OnboardingStep::ProductPreferences => &[UserField::ProductInterest],
            OnboardingStep::Confirmation => &[],
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Step {0} is outside 1..=4")]
    StepOutOfRange(u8),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Cannot complete onboarding from step {0}")]
    NotAtConfirmation(u8),
}
