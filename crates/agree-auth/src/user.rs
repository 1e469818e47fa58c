//! User account types.

use std::fmt;

use serde::Serialize;

/// The locally registered account.
///
/// The password is kept in plaintext and compared verbatim. There is no
/// getter for it: once stored it is only ever used by [`UserAccount::matches`].
#[derive(Clone, PartialEq, Eq)]
pub struct UserAccount {
    email: String,
    password: String,
    nickname: String,
}

impl UserAccount {
    /// Create a new account with the given fields, stored verbatim.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            nickname: nickname.into(),
        }
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display name.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Exact, case-sensitive comparison of both credentials.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// Public-facing fields for display.
    pub fn view(&self) -> AccountView<'_> {
        AccountView {
            nickname: &self.nickname,
            email: &self.email,
        }
    }
}

impl fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAccount")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("nickname", &self.nickname)
            .finish()
    }
}

/// The fields of an account that may be shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountView<'a> {
    /// Display name.
    pub nickname: &'a str,
    /// Email address.
    pub email: &'a str,
}
