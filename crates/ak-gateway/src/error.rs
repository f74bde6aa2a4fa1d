use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Fallback when the auth service sends no readable error body
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "Request failed. Please try again.";

/// Errors from calls to the auth service
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Auth service error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Session rejected by the auth service {location}")]
    Unauthorized { location: ErrorLocation },
}

impl GatewayError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GatewayError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(status: u16, message: String) -> Self {
        GatewayError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an Unauthorized error with location
    #[track_caller]
    pub fn unauthorized() -> Self {
        GatewayError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message fit for terminal display
    pub fn user_message(&self) -> &str {
        match self {
            Self::Api { message, .. } => message,
            Self::Unauthorized { .. } => "Your session has expired. Please sign in again.",
            Self::Http { .. } => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GatewayError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
