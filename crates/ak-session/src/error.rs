use std::panic::Location;
use std::result::Result as StdResult;

use ak_store::StoreError;
use ak_token::TokenError;
use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from session transitions
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid token: {source} {location}")]
    InvalidToken {
        #[source]
        source: TokenError,
        location: ErrorLocation,
    },

    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Token persistence failed: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Creates InvalidToken error at caller location.
    #[track_caller]
    pub fn invalid_token(source: TokenError) -> Self {
        Self::InvalidToken {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotAuthenticated error at caller location.
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Store error at caller location.
    #[track_caller]
    pub fn store(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
