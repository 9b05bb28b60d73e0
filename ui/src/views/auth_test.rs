use super::*;

#[test]
fn email_is_required() {
    assert_eq!(check_email("  ").as_deref(), Some("Email is a required field"));
}

#[test]
fn email_needs_at_symbol() {
    assert!(check_email("sruthi.example.com").is_some());
    assert_eq!(check_email("sruthi@example.com"), None);
}

#[test]
fn overlong_email_is_rejected() {
    let email = format!("{}@example.com", "a".repeat(LIMITS.max_email_length));
    assert_eq!(check_email(&email).as_deref(), Some("Email is too long"));
}

#[test]
fn login_checks_email_before_password() {
    assert_eq!(
        check_form(Mode::Login, "", "", "", "").as_deref(),
        Some("Email is a required field")
    );
    assert_eq!(
        check_form(Mode::Login, "", "a@b.c", "", "").as_deref(),
        Some("Password is a required field")
    );
    assert_eq!(check_form(Mode::Login, "", "a@b.c", "", "pw"), None);
}

#[test]
fn login_ignores_signup_fields() {
    let long_phone = "9".repeat(LIMITS.max_phone_length + 1);
    assert_eq!(check_form(Mode::Login, "", "a@b.c", &long_phone, "pw"), None);
}

#[test]
fn signup_requires_name_first() {
    assert_eq!(
        check_form(Mode::Signup, " ", "a@b.c", "", "pw").as_deref(),
        Some("Full name is a required field")
    );
}

#[test]
fn signup_phone_is_optional_but_bounded() {
    assert_eq!(check_form(Mode::Signup, "Asha", "a@b.c", "", "pw"), None);
    let long_phone = "9".repeat(LIMITS.max_phone_length + 1);
    assert_eq!(
        check_form(Mode::Signup, "Asha", "a@b.c", &long_phone, "pw").as_deref(),
        Some("Phone number is too long")
    );
}
