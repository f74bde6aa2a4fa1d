use crate::{CoreError, Result as CoreResult};
use crate::validation::CredentialValidator;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Partial profile change sent to the auth service
///
/// Absent fields are left unchanged server-side and are omitted from the
/// request body.
#[derive(Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Treat blank input as "leave unchanged"
    ///
    /// The email is trimmed; the password is kept as typed but dropped
    /// when it is all whitespace.
    pub fn normalized(self) -> Self {
        let email = self
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());

        let password = self.password.filter(|password| !password.trim().is_empty());

        Self { email, password }
    }

    /// Check the patch before sending it to the auth service
    ///
    /// At least one field must be present; present fields follow the same
    /// rules as signup.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.is_empty() {
            return Err(CoreError::EmptyUpdate {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref email) = self.email {
            CredentialValidator::validate_email(email)?;
        }

        if let Some(ref password) = self.password {
            CredentialValidator::validate_password(password)?;
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
