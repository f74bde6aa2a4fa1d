use ak_gateway::GatewayError;
use thiserror::Error;

/// Errors surfaced to the terminal as `Error: {message}`
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ak_config::ConfigError),

    #[error("{0}")]
    Validation(#[from] ak_core::CoreError),

    #[error("{0}")]
    Session(#[from] ak_session::SessionError),

    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: GatewayError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("{message}")]
    Usage { message: String },
}

impl CliError {
    /// Plain user-facing failure with no underlying cause
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage {
            message: message.into(),
        }
    }
}

impl From<GatewayError> for CliError {
    // Display carries the terminal-ready message; the source keeps the
    // full chain
    fn from(err: GatewayError) -> Self {
        CliError::Request {
            message: err.user_message().to_string(),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
