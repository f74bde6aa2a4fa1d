use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from decoding or validating a bearer token
///
/// Variants never carry the token itself; a bearer token is a credential
/// and must stay out of logs and error chains.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Malformed token: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired or expires within {buffer_secs}s (exp: {expires_at}) {location}")]
    Expired {
        expires_at: i64,
        buffer_secs: i64,
        location: ErrorLocation,
    },
}

impl TokenError {
    #[track_caller]
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, TokenError>;
