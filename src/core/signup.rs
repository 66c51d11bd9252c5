//! Sign-up form state and submit validation.
//!
//! The only validation in the application lives here: every field must be
//! non-empty and the password must meet a minimum length. A failed submit
//! leaves the fields as typed and records a single error message; a
//! successful one reports the record and clears the form.

use std::fmt;

use serde::Serialize;

use crate::core::sink::CompletionSink;

pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

/// Editable fields of the sign-up form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl SignupField {
    pub const ALL: [SignupField; 4] = [
        SignupField::FirstName,
        SignupField::LastName,
        SignupField::Email,
        SignupField::Password,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SignupField::FirstName => "First name",
            SignupField::LastName => "Last name",
            SignupField::Email => "Email",
            SignupField::Password => "Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SignupField::FirstName => "John",
            SignupField::LastName => "Doe",
            SignupField::Email => "john.doe@example.com",
            SignupField::Password => "••••••••",
        }
    }

    /// Whether typed input is masked on screen.
    pub fn is_secret(self) -> bool {
        self == SignupField::Password
    }
}

/// A validated sign-up. The password never leaves through serialization.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Debug for SignupData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupData")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

/// Sign-up form state: four text fields and the last submit error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    error: Option<String>,
    min_password_len: usize,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LEN)
    }
}

impl SignupForm {
    pub fn new(min_password_len: usize) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            error: None,
            min_password_len,
        }
    }

    pub fn field(&self, field: SignupField) -> &str {
        match field {
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: SignupField, value: impl Into<String>) {
        let slot = match field {
            SignupField::FirstName => &mut self.first_name,
            SignupField::LastName => &mut self.last_name,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Error from the most recent submit, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn min_password_len(&self) -> usize {
        self.min_password_len
    }

    fn validate(&self) -> Result<(), SignupError> {
        if SignupField::ALL.iter().any(|&f| self.field(f).is_empty()) {
            return Err(SignupError::MissingFields);
        }
        if self.password.chars().count() < self.min_password_len {
            return Err(SignupError::PasswordTooShort {
                min: self.min_password_len,
            });
        }
        Ok(())
    }

    /// Validate and submit.
    ///
    /// The previous error is cleared first. On failure the message is kept in
    /// [`error`](Self::error) and `sink` is not called. On success the record
    /// is emitted and every field is cleared.
    pub fn submit<S>(&mut self, sink: &S) -> Result<SignupData, SignupError>
    where
        S: CompletionSink<SignupData> + ?Sized,
    {
        self.error = None;

        if let Err(e) = self.validate() {
            log::debug!("Sign-up rejected: {e}");
            self.error = Some(e.to_string());
            return Err(e);
        }

        let data = SignupData {
            first_name: std::mem::take(&mut self.first_name),
            last_name: std::mem::take(&mut self.last_name),
            email: std::mem::take(&mut self.email),
            password: std::mem::take(&mut self.password),
        };
        sink.emit(&data);
        log::info!("Sign-up submitted for {}", data.email);
        Ok(data)
    }
}
