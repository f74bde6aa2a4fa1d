use ak_core::Identity;
use serde::{Deserialize, Serialize};

/// JWT claims as the auth service issues them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i64,

    /// Account email
    pub email: String,

    /// Account creation timestamp (ISO-8601, issuer-formatted)
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Issued-at (Unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration (Unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Map the claims into a session identity
    ///
    /// Pure projection; expiry is the caller's concern via
    /// [`crate::TokenDecoder::validate`].
    pub fn to_identity(&self) -> Identity {
        Identity {
            id: self.sub,
            email: self.email.clone(),
            created_at: self.created_at.clone(),
        }
    }

    /// Expiry with the missing case collapsed to the epoch
    ///
    /// A token without `exp` can never sit inside the validity window.
    pub fn expires_at(&self) -> i64 {
        self.exp.unwrap_or(0)
    }
}
