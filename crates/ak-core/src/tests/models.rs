use crate::error::CoreError;
use crate::models::auth_response::AuthResponse;
use crate::models::credentials::Credentials;
use crate::models::identity::Identity;
use crate::models::profile_update::ProfileUpdate;

fn identity() -> Identity {
    Identity {
        id: 42,
        email: "user@example.com".to_string(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

#[test]
fn given_valid_credentials_when_validated_then_accepted() {
    let credentials = Credentials::new("user@example.com", "secret");
    assert!(credentials.validate().is_ok());
}

#[test]
fn given_bad_email_when_credentials_validated_then_rejected() {
    let credentials = Credentials::new("not-an-email", "secret");
    assert!(matches!(
        credentials.validate(),
        Err(CoreError::InvalidEmail { .. })
    ));
}

#[test]
fn given_short_password_when_credentials_validated_then_rejected() {
    let credentials = Credentials::new("user@example.com", "abc");
    assert!(matches!(
        credentials.validate(),
        Err(CoreError::PasswordTooShort { .. })
    ));
}

#[test]
fn given_credentials_when_serialized_then_both_fields_present() {
    let credentials = Credentials::new("user@example.com", "secret");
    let json = serde_json::to_value(&credentials).unwrap();

    assert_eq!(json["email"], "user@example.com");
    assert_eq!(json["password"], "secret");
}

#[test]
fn given_padded_email_when_normalized_then_trimmed() {
    let update = ProfileUpdate {
        email: Some("  user@example.com  ".to_string()),
        password: None,
    };

    let normalized = update.normalized();
    assert_eq!(normalized.email.as_deref(), Some("user@example.com"));
}

#[test]
fn given_blank_fields_when_normalized_then_dropped() {
    let update = ProfileUpdate {
        email: Some("   ".to_string()),
        password: Some("\t".to_string()),
    };

    let normalized = update.normalized();
    assert!(normalized.is_empty());
}

#[test]
fn given_password_with_inner_content_when_normalized_then_kept_as_typed() {
    let update = ProfileUpdate {
        email: None,
        password: Some(" secret ".to_string()),
    };

    let normalized = update.normalized();
    assert_eq!(normalized.password.as_deref(), Some(" secret "));
}

#[test]
fn given_empty_update_when_validated_then_rejected() {
    let update = ProfileUpdate::default();
    assert!(matches!(
        update.validate(),
        Err(CoreError::EmptyUpdate { .. })
    ));
}

#[test]
fn given_email_only_update_when_validated_then_accepted() {
    let update = ProfileUpdate {
        email: Some("new@example.com".to_string()),
        password: None,
    };
    assert!(update.validate().is_ok());
}

#[test]
fn given_password_only_update_when_validated_then_accepted() {
    let update = ProfileUpdate {
        email: None,
        password: Some("longenough".to_string()),
    };
    assert!(update.validate().is_ok());
}

#[test]
fn given_update_when_serialized_then_absent_fields_omitted() {
    let update = ProfileUpdate {
        email: Some("new@example.com".to_string()),
        password: None,
    };

    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["email"], "new@example.com");
    assert!(json.get("password").is_none());
}

#[test]
fn given_email_patch_when_merged_then_only_email_changes() {
    let mut identity = identity();
    let update = ProfileUpdate {
        email: Some("new@example.com".to_string()),
        password: None,
    };

    identity.merge(&update);

    assert_eq!(identity.email, "new@example.com");
    assert_eq!(identity.id, 42);
    assert_eq!(identity.created_at, "2024-01-01T00:00:00.000Z");
}

#[test]
fn given_password_patch_when_merged_then_identity_unchanged() {
    let mut identity = identity();
    let before = identity.clone();
    let update = ProfileUpdate {
        email: None,
        password: Some("newpassword".to_string()),
    };

    identity.merge(&update);

    assert_eq!(identity, before);
}

#[test]
fn given_identity_when_serialized_then_uses_camel_case() {
    let json = serde_json::to_value(identity()).unwrap();

    assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
    assert!(json.get("created_at").is_none());
}

#[test]
fn given_response_with_token_when_deserialized_then_token_present() {
    let response: AuthResponse =
        serde_json::from_str(r#"{"message":"Login successful","token":"abc"}"#).unwrap();

    assert_eq!(response.message, "Login successful");
    assert_eq!(response.token.as_deref(), Some("abc"));
}

#[test]
fn given_response_without_token_when_deserialized_then_token_absent() {
    let response: AuthResponse = serde_json::from_str(r#"{"message":"User created"}"#).unwrap();

    assert_eq!(response.message, "User created");
    assert!(response.token.is_none());
}
