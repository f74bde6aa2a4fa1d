use crate::{Claims, Result as TokenResult, TokenError};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;

/// Seconds before nominal expiry at which a token stops being usable
///
/// A token inside this window could expire while a request carrying it
/// is in flight, so it is treated as already invalid.
pub const EXPIRY_BUFFER_SECS: i64 = 300;

/// Decodes bearer tokens without verifying the signature
///
/// The auth service signs its tokens but this client never holds the
/// key. Claims are decoded for display and expiry tracking only; the
/// service re-checks the signature on every request, and a forged token
/// buys nothing but a 401.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenDecoder;

impl TokenDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode the payload segment into claims
    ///
    /// Fails with [`TokenError::Malformed`] when the token is not three
    /// dot-separated segments, the payload is not base64url, the claims
    /// do not parse, or the expiry is negative.
    #[track_caller]
    pub fn decode(&self, token: &str) -> TokenResult<Claims> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::malformed(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        }

        let payload = URL_SAFE_NO_PAD
            .decode(segments[1])
            .map_err(|e| TokenError::malformed(format!("payload is not base64url: {e}")))?;

        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|e| TokenError::malformed(format!("payload claims: {e}")))?;

        if let Some(exp) = claims.exp
            && exp < 0
        {
            return Err(TokenError::malformed(format!("negative exp claim: {exp}")));
        }

        Ok(claims)
    }

    /// Decode and check the expiry window against `now` (Unix seconds)
    ///
    /// The token must outlive `now` by more than [`EXPIRY_BUFFER_SECS`].
    #[track_caller]
    pub fn validate(&self, token: &str, now: i64) -> TokenResult<Claims> {
        let claims = self.decode(token)?;

        let expires_at = claims.expires_at();
        if expires_at.saturating_sub(now) <= EXPIRY_BUFFER_SECS {
            return Err(TokenError::Expired {
                expires_at,
                buffer_secs: EXPIRY_BUFFER_SECS,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }

    /// Whether the token decodes and sits outside the expiry buffer
    pub fn is_valid(&self, token: &str, now: i64) -> bool {
        self.validate(token, now).is_ok()
    }
}
