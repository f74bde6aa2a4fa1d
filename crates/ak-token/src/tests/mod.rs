mod validity;

use crate::Claims;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub(crate) const TEST_SECRET: &str = "unit-test-signing-secret";

/// Reference instant for expiry math, fixed so tests do not depend on
/// the wall clock
pub(crate) const FIXED_NOW: i64 = 1_700_000_000;

pub(crate) fn claims_with_exp(exp: Option<i64>) -> Claims {
    Claims {
        sub: 7,
        email: "user@example.com".to_string(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        iat: Some(FIXED_NOW - 60),
        exp,
    }
}

pub(crate) fn mint_token(claims: &Claims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode test token")
}
