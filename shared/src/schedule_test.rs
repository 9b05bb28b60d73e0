use super::*;

#[test]
fn slot_labels_use_twelve_hour_clock() {
    assert_eq!(slot_label("08:00").as_deref(), Some("8:00 AM"));
    assert_eq!(slot_label("12:30").as_deref(), Some("12:30 PM"));
    assert_eq!(slot_label("13:00").as_deref(), Some("1:00 PM"));
    assert_eq!(slot_label("20:00").as_deref(), Some("8:00 PM"));
}

#[test]
fn malformed_slot_has_no_label() {
    assert_eq!(slot_label("lunch"), None);
}

#[test]
fn defaults_are_offered() {
    assert!(DELIVERY_DATES.iter().any(|(value, _)| *value == DEFAULT_DATE));
    assert!(DELIVERY_SLOTS.contains(&DEFAULT_SLOT));
}
