use crate::Result as CoreResult;
use crate::validation::CredentialValidator;

use serde::Serialize;

/// Email and password pair for signup and login requests
///
/// Deliberately not `Debug`: the password must never reach logs.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check both fields before sending them to the auth service
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        CredentialValidator::validate_email(&self.email)?;
        CredentialValidator::validate_password(&self.password)?;
        Ok(())
    }
}
