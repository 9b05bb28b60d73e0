use super::*;

#[test]
fn profile_checks_fields_in_display_order() {
    assert_eq!(
        check_profile(" ", "", "").as_deref(),
        Some("Full name is a required field")
    );
    assert_eq!(
        check_profile("Sruthi Kumar", "sruthi", "").as_deref(),
        Some("Email must contain \"@\" symbol")
    );
    assert_eq!(check_profile("Sruthi Kumar", "sruthi@example.com", "+91 98765 43210"), None);
}

#[test]
fn overlong_phone_is_rejected() {
    let phone = "9".repeat(LIMITS.max_phone_length + 1);
    assert_eq!(
        check_profile("Sruthi Kumar", "sruthi@example.com", &phone).as_deref(),
        Some("Phone number is too long")
    );
}

#[test]
fn first_address_is_home() {
    assert_eq!(address_label(0), "Home");
    assert_eq!(address_label(1), "Work");
    assert_eq!(address_label(4), "Work");
}

#[test]
fn tabs_have_distinct_labels() {
    let mut labels: Vec<&str> = Tab::ALL.iter().map(|tab| tab.label()).collect();
    labels.dedup();
    assert_eq!(labels.len(), Tab::ALL.len());
}
