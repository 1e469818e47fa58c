//! Sign-in state for one storefront session.

use crate::user::UserAccount;
use crate::AuthError;
use serde::{Deserialize, Serialize};

/// What `register` does when an account already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// Replace the existing account with the new one.
    #[default]
    Overwrite,
    /// Refuse with [`AuthError::AccountExists`].
    Reject,
}

/// Authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// In-memory account slot plus sign-in flag.
///
/// Holds at most one [`UserAccount`]. Logging out empties the slot, so a
/// later login fails until someone registers again. Nothing survives the
/// process.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    account: Option<UserAccount>,
    state: AuthState,
    policy: RegistrationPolicy,
}

impl AuthSession {
    /// Create an unauthenticated session with no account.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific registration policy.
    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register an account and sign it in.
    ///
    /// Returns an error if:
    /// - Any of the three fields is empty (no account is created)
    /// - An account exists and the policy is [`RegistrationPolicy::Reject`]
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        nickname: &str,
    ) -> Result<&UserAccount, AuthError> {
        let fields = [("email", email), ("password", password), ("nickname", nickname)];
        let missing: Vec<&'static str> = fields
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(label, _)| label)
            .collect();
        if !missing.is_empty() {
            return Err(AuthError::MissingField(missing));
        }

        if let Some(existing) = &self.account {
            match self.policy {
                RegistrationPolicy::Reject => {
                    return Err(AuthError::AccountExists(existing.email().to_string()));
                }
                RegistrationPolicy::Overwrite => {
                    tracing::warn!(
                        previous = existing.nickname(),
                        "replacing existing account"
                    );
                }
            }
        }

        self.state = AuthState::Authenticated;
        tracing::info!(nickname = nickname, "account registered");
        Ok(&*self.account.insert(UserAccount::new(email, password, nickname)))
    }

    /// Sign in with the registered account's credentials.
    ///
    /// Fails with [`AuthError::InvalidCredentials`] when no account has been
    /// registered in this session or the credentials differ.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&UserAccount, AuthError> {
        let account = match &self.account {
            Some(account) if account.matches(email, password) => account,
            _ => return Err(AuthError::InvalidCredentials),
        };

        self.state = AuthState::Authenticated;
        tracing::info!(nickname = account.nickname(), "signed in");
        Ok(account)
    }

    /// Sign out and forget the account. Always succeeds.
    pub fn logout(&mut self) {
        if self.state == AuthState::Authenticated {
            tracing::info!("signed out");
        }
        self.account = None;
        self.state = AuthState::Unauthenticated;
    }

    /// Current state.
    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Check if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// The signed-in account, `None` when signed out.
    pub fn current_account(&self) -> Option<&UserAccount> {
        if self.is_authenticated() {
            self.account.as_ref()
        } else {
            None
        }
    }

    /// Nickname of the signed-in account.
    pub fn display_name(&self) -> Option<&str> {
        self.current_account().map(UserAccount::nickname)
    }

    /// Check if an account is registered and not yet logged out.
    pub fn has_account(&self) -> bool {
        self.account.is_some()
    }

    /// Registration policy in effect.
    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }
}
