use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Teacher.as_str(), "teacher");
    assert_eq!(Role::Student.as_str(), "student");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("teacher").unwrap(), Role::Teacher);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("principal").is_err());
}

#[test]
fn test_role_default_is_teacher() {
    assert_eq!(Role::default(), Role::Teacher);
}

#[test]
fn test_only_teacher_and_admin_are_staff() {
    assert!(Role::Admin.is_staff());
    assert!(Role::Teacher.is_staff());
    assert!(!Role::Student.is_staff());
}

#[test]
fn test_role_serializes_snake_case() {
    let json = serde_json::to_string(&Role::Teacher).unwrap();
    assert_eq!(json, "\"teacher\"");
}
