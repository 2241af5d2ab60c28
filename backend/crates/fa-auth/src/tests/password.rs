use crate::{AuthError, hash_password, verify_password};

#[test]
fn test_hash_verifies_original_password() {
    let hash = hash_password("correct-horse-battery").unwrap();

    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("correct-horse-battery", &hash).unwrap());
}

#[test]
fn test_hash_rejects_wrong_password() {
    let hash = hash_password("correct-horse-battery").unwrap();

    assert!(!verify_password("wrong-password", &hash).unwrap());
}

#[test]
fn test_hashes_are_salted() {
    let a = hash_password("same-password").unwrap();
    let b = hash_password("same-password").unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_malformed_stored_hash_is_an_error() {
    let result = verify_password("anything", "not-a-phc-string");

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}
