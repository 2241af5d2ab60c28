use crate::{AuthForm, AuthMode};

#[test]
fn test_mode_toggles_both_ways() {
    assert_eq!(AuthMode::Login.toggle(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggle(), AuthMode::Login);
}

#[test]
fn test_mode_texts() {
    assert_eq!(AuthMode::Login.title(), "Welcome Back");
    assert_eq!(AuthMode::Register.title(), "Create Account");
    assert_eq!(AuthMode::Login.submit_label(), "Login");
    assert_eq!(AuthMode::Register.switch_prompt().1, "Login");
}

#[test]
fn test_default_form_is_login() {
    assert_eq!(AuthForm::default().mode, AuthMode::Login);
}

#[test]
fn test_login_payload_omits_name_and_role() {
    let mut form = AuthForm::login("t@school.edu", "secret123");
    form.name = "Ignored".into();

    let payload = form.payload();

    assert_eq!(payload["email"], "t@school.edu");
    assert_eq!(payload["password"], "secret123");
    assert!(payload.get("name").is_none());
    assert!(payload.get("role").is_none());
}

#[test]
fn test_register_payload_has_teacher_role() {
    let form = AuthForm::register("Ada", "ada@school.edu", "secret123");

    let payload = form.payload();

    assert_eq!(payload["name"], "Ada");
    assert_eq!(payload["email"], "ada@school.edu");
    assert_eq!(payload["password"], "secret123");
    assert_eq!(payload["role"], "teacher");
}

#[test]
fn test_toggle_mode_switches_payload_shape() {
    let mut form = AuthForm::register("Ada", "ada@school.edu", "secret123");

    form.toggle_mode();

    assert_eq!(form.mode, AuthMode::Login);
    assert!(form.payload().get("role").is_none());
}
