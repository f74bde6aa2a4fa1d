use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Shortest password the auth service accepts
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validates credentials before they leave the client
pub struct CredentialValidator;

impl CredentialValidator {
    /// Validate an email address
    ///
    /// Mirrors the auth service check: one `@` with something before it,
    /// a dotted domain after it, and no whitespace anywhere.
    #[track_caller]
    pub fn validate_email(email: &str) -> CoreResult<()> {
        if Self::is_well_formed_email(email) {
            Ok(())
        } else {
            Err(CoreError::InvalidEmail {
                value: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    /// Validate a password
    ///
    /// Only the length is checked, counted in characters rather than
    /// bytes; the value itself never appears in errors or logs.
    #[track_caller]
    pub fn validate_password(password: &str) -> CoreResult<()> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::PasswordTooShort {
                minimum: MIN_PASSWORD_LENGTH,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    fn is_well_formed_email(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        // The domain needs a dot with something on both sides
        let Some((host, tld)) = domain.rsplit_once('.') else {
            return false;
        };

        !host.is_empty() && !tld.is_empty()
    }
}
