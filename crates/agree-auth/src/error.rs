//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// One or more required fields are empty.
    #[error("please fill in all fields (missing: {})", .0.join(", "))]
    MissingField(Vec<&'static str>),

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password too short.
    #[error("password must be at least {min_length} characters")]
    WeakPassword { min_length: usize },

    /// Invalid credentials provided, or no account registered yet.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// An account is already registered and the policy forbids replacing it.
    #[error("an account is already registered: {0}")]
    AccountExists(String),
}

impl AuthError {
    /// Check if this is a form validation failure the user can fix in place.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingField(_) | AuthError::PasswordMismatch | AuthError::WeakPassword { .. }
        )
    }

    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::MissingField(vec!["email"]).to_string(),
            "please fill in all fields (missing: email)"
        );
        assert_eq!(
            AuthError::WeakPassword { min_length: 6 }.to_string(),
            "password must be at least 6 characters"
        );
        assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid email or password");
    }

    #[test]
    fn test_classification() {
        assert!(AuthError::PasswordMismatch.is_validation_error());
        assert!(!AuthError::PasswordMismatch.is_auth_failure());
        assert!(AuthError::InvalidCredentials.is_auth_failure());
        assert!(!AuthError::AccountExists("a@b.com".into()).is_validation_error());
    }
}
