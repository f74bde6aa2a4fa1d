use crate::error::TokenError;
use crate::tests::{FIXED_NOW, claims_with_exp, mint_token};
use crate::{EXPIRY_BUFFER_SECS, TokenDecoder};

#[test]
fn given_token_just_outside_buffer_when_checked_then_valid() {
    let token = mint_token(&claims_with_exp(Some(FIXED_NOW + EXPIRY_BUFFER_SECS + 1)));
    assert!(TokenDecoder::new().is_valid(&token, FIXED_NOW));
}

#[test]
fn given_token_exactly_at_buffer_when_checked_then_invalid() {
    let token = mint_token(&claims_with_exp(Some(FIXED_NOW + EXPIRY_BUFFER_SECS)));
    assert!(!TokenDecoder::new().is_valid(&token, FIXED_NOW));
}

#[test]
fn given_token_inside_buffer_when_checked_then_invalid() {
    let token = mint_token(&claims_with_exp(Some(FIXED_NOW + EXPIRY_BUFFER_SECS - 1)));
    assert!(!TokenDecoder::new().is_valid(&token, FIXED_NOW));
}

#[test]
fn given_expired_token_when_checked_then_invalid() {
    let token = mint_token(&claims_with_exp(Some(FIXED_NOW - 10)));
    assert!(!TokenDecoder::new().is_valid(&token, FIXED_NOW));
}

#[test]
fn given_token_without_expiry_when_checked_then_invalid() {
    let token = mint_token(&claims_with_exp(None));
    assert!(!TokenDecoder::new().is_valid(&token, FIXED_NOW));
}

#[test]
fn given_malformed_token_when_checked_then_invalid() {
    assert!(!TokenDecoder::new().is_valid("garbage", FIXED_NOW));
}

#[test]
fn given_valid_token_when_validated_then_claims_returned() {
    let claims = claims_with_exp(Some(FIXED_NOW + 7200));
    let token = mint_token(&claims);

    let validated = TokenDecoder::new().validate(&token, FIXED_NOW).unwrap();

    assert_eq!(validated.sub, claims.sub);
    assert_eq!(validated.exp, claims.exp);
}

#[test]
fn given_expired_token_when_validated_then_error_carries_expiry() {
    let expires_at = FIXED_NOW - 60;
    let token = mint_token(&claims_with_exp(Some(expires_at)));

    let result = TokenDecoder::new().validate(&token, FIXED_NOW);

    match result {
        Err(TokenError::Expired {
            expires_at: reported,
            buffer_secs,
            ..
        }) => {
            assert_eq!(reported, expires_at);
            assert_eq!(buffer_secs, EXPIRY_BUFFER_SECS);
        }
        other => panic!("Expected Expired, got {other:?}"),
    }
}

#[test]
fn given_token_without_expiry_when_validated_then_error_reports_epoch() {
    let token = mint_token(&claims_with_exp(None));

    let result = TokenDecoder::new().validate(&token, FIXED_NOW);

    match result {
        Err(TokenError::Expired { expires_at, .. }) => assert_eq!(expires_at, 0),
        other => panic!("Expected Expired, got {other:?}"),
    }
}
