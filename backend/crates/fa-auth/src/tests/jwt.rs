use crate::{AuthError, Claims, JwtIssuer, JwtValidator};

use fa_core::Role;

use jsonwebtoken::Algorithm;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims() -> Claims {
    Claims {
        sub: Uuid::new_v4().to_string(),
        role: "teacher".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

#[test]
fn given_valid_token_when_validated_then_returns_claims() {
    let validator = JwtValidator::with_hs256(SECRET);
    let claims = valid_claims();
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(result.is_ok());
    let validated = result.unwrap();
    assert_eq!(validated.sub, claims.sub);
    assert_eq!(validated.role, "teacher");
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let wrong_secret = b"wrong-secret-key-at-least-32-by";
    let validator = JwtValidator::with_hs256(wrong_secret);
    let token = create_test_token(&valid_claims(), SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_unknown_role_when_validated_then_returns_invalid_claim() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.role = "janitor".to_string();
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { claim, .. }) if claim == "role"));
}

#[test]
fn given_issued_token_when_validated_then_subject_and_role_round_trip() {
    let issuer = JwtIssuer::with_hs256(SECRET, 60);
    let validator = JwtValidator::with_hs256(SECRET);
    let user_id = Uuid::new_v4();

    let token = issuer.issue(user_id, Role::Admin).unwrap();
    let claims = validator.validate(&token).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.parsed_role().unwrap(), Role::Admin);
    assert_eq!(claims.exp - claims.iat, issuer.ttl_seconds());
}

#[test]
fn given_missing_header_when_validating_header_then_missing_header_error() {
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate_header(None);

    assert!(matches!(result, Err(AuthError::MissingHeader { .. })));
}

#[test]
fn given_basic_scheme_when_validating_header_then_invalid_scheme_error() {
    let validator = JwtValidator::with_hs256(SECRET);

    let result = validator.validate_header(Some("Basic dXNlcjpwYXNz"));

    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}

#[test]
fn given_bearer_header_when_validating_header_then_returns_claims() {
    let validator = JwtValidator::with_hs256(SECRET);
    let token = create_test_token(&valid_claims(), SECRET);

    let result = validator.validate_header(Some(&format!("Bearer {token}")));

    assert!(result.is_ok());
}
