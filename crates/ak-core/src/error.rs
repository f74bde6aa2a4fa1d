use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid email address: {value} {location}")]
    InvalidEmail {
        value: String,
        location: ErrorLocation,
    },

    #[error("Password must be at least {minimum} characters {location}")]
    PasswordTooShort {
        minimum: usize,
        location: ErrorLocation,
    },

    #[error("Profile update is empty: provide an email or a password {location}")]
    EmptyUpdate { location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
