use serde::Deserialize;

/// Response body shared by every auth service endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Human-readable outcome, surfaced to the user as-is
    pub message: String,

    /// Bearer token, present on login and on signup when the service
    /// signs the account in immediately
    #[serde(default)]
    pub token: Option<String>,
}
