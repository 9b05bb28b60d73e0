use super::*;

#[test]
fn starts_at_configured_eta() {
    assert_eq!(EtaCountdown::default().minutes(), 25);
}

#[test]
fn tick_decrements_by_one_minute() {
    let mut eta = EtaCountdown::new(3);
    assert_eq!(eta.tick(), 2);
    assert_eq!(eta.minutes(), 2);
    assert!(!eta.is_due());
}

#[test]
fn floors_at_zero() {
    let mut eta = EtaCountdown::new(1);
    eta.tick();
    eta.tick();
    eta.tick();
    assert_eq!(eta.minutes(), 0);
    assert!(eta.is_due());
}
