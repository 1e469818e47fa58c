//! Registration and login forms.
//!
//! The checkout screen checks these before touching the [`AuthSession`], so
//! the session itself only ever sees non-empty fields from a submitted form.

use serde::{Deserialize, Serialize};

use crate::session::AuthSession;
use crate::user::UserAccount;
use crate::AuthError;

/// Password requirements enforced at form level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRules {
    /// Minimum number of characters.
    pub min_length: usize,
}

impl PasswordRules {
    /// Default minimum password length.
    pub const DEFAULT_MIN_LENGTH: usize = 6;

    /// Check a password against the rules.
    pub fn check(&self, password: &str) -> Result<(), AuthError> {
        if password.chars().count() < self.min_length {
            return Err(AuthError::WeakPassword {
                min_length: self.min_length,
            });
        }
        Ok(())
    }
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
        }
    }
}

/// The "Create Account" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub nickname: String,
}

impl RegistrationForm {
    /// Create a filled-in form.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
            nickname: nickname.into(),
        }
    }

    /// Validate in order: every field present, confirmation matches,
    /// password long enough. The first failing check wins.
    pub fn validate(&self, rules: &PasswordRules) -> Result<(), AuthError> {
        let missing = missing_fields(&[
            ("email", &self.email),
            ("password", &self.password),
            ("password confirmation", &self.password_confirmation),
            ("nickname", &self.nickname),
        ]);
        if !missing.is_empty() {
            return Err(AuthError::MissingField(missing));
        }

        if self.password != self.password_confirmation {
            return Err(AuthError::PasswordMismatch);
        }

        rules.check(&self.password)
    }

    /// Validate, then register the account on the session.
    pub fn submit<'s>(
        &self,
        session: &'s mut AuthSession,
        rules: &PasswordRules,
    ) -> Result<&'s UserAccount, AuthError> {
        self.validate(rules)?;
        session.register(&self.email, &self.password, &self.nickname)
    }
}

/// The "Login" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Create a filled-in form.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check that both fields are present.
    pub fn validate(&self) -> Result<(), AuthError> {
        let missing = missing_fields(&[("email", &self.email), ("password", &self.password)]);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthError::MissingField(missing))
        }
    }

    /// Validate, then sign in on the session.
    pub fn submit<'s>(&self, session: &'s mut AuthSession) -> Result<&'s UserAccount, AuthError> {
        self.validate()?;
        session.login(&self.email, &self.password)
    }
}

fn missing_fields(fields: &[(&'static str, &String)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| *label)
        .collect()
}
