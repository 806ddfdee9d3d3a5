//! Local form state for the Sign-In screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by a single `SignInPage` instance inside one `RwSignal`. Nothing here
//! outlives the page; there is no persistence and no shared context.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use crate::util::notify::{Notice, Notifier};

/// Whether the password control renders its value masked or as plain text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Plain,
}

impl PasswordVisibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }

    pub fn is_plain(self) -> bool {
        self == Self::Plain
    }

    /// `type` attribute for the password `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Plain => "text",
        }
    }

    /// Accessible label describing what the toggle will do next.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Masked => "Show password",
            Self::Plain => "Hide password",
        }
    }
}

/// Submit-time validation failure.
///
/// One variant covers an empty email, an empty password, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("Please enter both Email and Password.")]
    MissingFields,
}

/// Field values that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    /// Email with surrounding whitespace removed.
    pub email: &'a str,
    pub password: &'a str,
}

/// What a submit attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the user was told to fill both fields.
    Rejected,
    /// Validation passed; the progress placeholder was shown.
    Pending,
}

/// Email, password, and visibility flag for one form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInState {
    pub email: String,
    pub password: String,
    pub visibility: PasswordVisibility,
}

impl SignInState {
    pub fn update_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
    }

    pub fn update_password(&mut self, text: impl Into<String>) {
        self.password = text.into();
    }

    pub fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    /// Check that a trimmed email and a password are both present.
    ///
    /// The password is not trimmed: whitespace is valid password content.
    ///
    /// # Errors
    ///
    /// Returns [`SignInError::MissingFields`] when either field is empty.
    pub fn validate(&self) -> Result<Credentials<'_>, SignInError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(SignInError::MissingFields);
        }
        Ok(Credentials { email, password: &self.password })
    }

    /// Validate and present the matching notice.
    ///
    /// No authentication request is made on success; the progress notice is a
    /// placeholder for one.
    pub fn submit(&self, notifier: &dyn Notifier) -> SubmitOutcome {
        match self.validate() {
            Err(err) => {
                notifier.notify(&Notice::Rejected(err));
                SubmitOutcome::Rejected
            }
            Ok(_) => {
                notifier.notify(&Notice::SigningIn);
                SubmitOutcome::Pending
            }
        }
    }
}
