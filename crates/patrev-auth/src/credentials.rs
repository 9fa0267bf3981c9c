//! Stand-in credential check.
//!
//! The review server has no login endpoint yet. Until it does, login compares
//! against a single configured email/password pair and issues a fixed token.

use patrev_config::AuthConfig;
use patrev_core::entities::User;

use crate::error::AuthError;

/// Token persisted after a successful stand-in login.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

const MOCK_USER_NAME: &str = "Test User";

/// The one email/password pair the stand-in check accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCredentials {
    pub email: String,
    pub password: String,
}

impl Default for MockCredentials {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

impl MockCredentials {
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            email: config.expected_email.clone(),
            password: config.expected_password.clone(),
        }
    }

    /// Check a login attempt. Exact, case-sensitive match on both fields.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on any mismatch.
    pub fn verify(&self, email: &str, password: &str) -> Result<(String, User), AuthError> {
        if email == self.email && password == self.password {
            Ok((
                MOCK_TOKEN.to_string(),
                User {
                    email: self.email.clone(),
                    name: MOCK_USER_NAME.to_string(),
                },
            ))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
