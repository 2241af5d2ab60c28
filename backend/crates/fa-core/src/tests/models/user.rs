use crate::{CoreError, Role, User};

use googletest::prelude::*;

#[test]
fn given_mixed_case_email_when_user_created_then_email_is_normalized() {
    let user = User::new(
        "Ada".to_string(),
        "  Ada@Example.COM ",
        "hash".to_string(),
        Role::Teacher,
    );

    assert_that!(user.email, eq("ada@example.com"));
}

#[test]
fn given_valid_input_when_validating_registration_then_ok() {
    let result = User::validate_registration("Ada", "ada@example.com", "correct-horse");

    assert_that!(result, ok(anything()));
}

#[test]
fn given_short_password_when_validating_registration_then_validation_error() {
    let result = User::validate_registration("Ada", "ada@example.com", "short");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_email_without_at_when_validating_registration_then_validation_error() {
    let result = User::validate_registration("Ada", "ada.example.com", "correct-horse");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_blank_name_when_validating_registration_then_validation_error() {
    let result = User::validate_registration("   ", "ada@example.com", "correct-horse");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_user_when_serialized_then_password_hash_is_omitted() {
    let user = User::new(
        "Ada".to_string(),
        "ada@example.com",
        "$argon2id$secret".to_string(),
        Role::Teacher,
    );

    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["role"], "teacher");
}
