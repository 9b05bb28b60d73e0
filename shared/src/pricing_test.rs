use super::*;
use crate::catalog::plan_by_id;

#[test]
fn starter_plan_per_meal_price() {
    let plan = plan_by_id("plan-1").unwrap();
    assert_eq!(price_per_meal(plan), Some(32));
}

#[test]
fn longer_plans_per_meal_price() {
    assert_eq!(price_per_meal(plan_by_id("plan-2").unwrap()), Some(54));
    assert_eq!(price_per_meal(plan_by_id("plan-3").unwrap()), Some(95));
}

#[test]
fn pay_as_you_go_has_no_per_meal_price() {
    assert_eq!(price_per_meal(plan_by_id("plan-4").unwrap()), None);
}

#[test]
fn order_total_applies_fee_and_discount() {
    assert_eq!(order_total(240, 0, 0), 240);
    assert_eq!(order_total(240, 30, 50), 220);
    assert_eq!(order_total(20, 0, 50), 0);
}

#[test]
fn rupees_are_prefixed() {
    assert_eq!(format_rupees(2999), "₹2999");
}

#[test]
fn grouped_rupees_insert_thousands_separators() {
    assert_eq!(format_rupees_grouped(24580), "₹24,580");
    assert_eq!(format_rupees_grouped(999), "₹999");
    assert_eq!(format_rupees_grouped(1_000_000), "₹1,000,000");
    assert_eq!(format_rupees_grouped(0), "₹0");
}
