use crate::models::profile_update::ProfileUpdate;

use serde::{Deserialize, Serialize};

/// Account identity as the auth service reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: i64,
    pub email: String,

    // ISO-8601 timestamp, formatted by the issuer
    pub created_at: String,
}

impl Identity {
    /// Apply a profile patch
    ///
    /// Only the email is part of the identity; a password change never
    /// reaches the client session.
    pub fn merge(&mut self, update: &ProfileUpdate) {
        if let Some(ref email) = update.email {
            self.email = email.clone();
        }
    }
}
