//! Account and sign-in state for the Agree storefront.
//!
//! A deliberately small, memory-only stand-in for authentication: one
//! account per session, plaintext credentials, exact-match login. It is not
//! a security mechanism and must not be used as one.

mod error;
mod forms;
mod session;
mod user;

pub use error::AuthError;
pub use forms::{LoginForm, PasswordRules, RegistrationForm};
pub use session::{AuthSession, AuthState, RegistrationPolicy};
pub use user::{AccountView, UserAccount};
