#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::types::SubscriptionPlan;

/// Weeks a plan price is spread over when quoting a per-meal price.
pub const WEEKS_PER_BILLING_PERIOD: u32 = 4;

/// Rounded per-meal price, or `None` for pay-per-meal plans.
pub fn price_per_meal(plan: &SubscriptionPlan) -> Option<u32> {
    let meals = plan.meals_per_week * WEEKS_PER_BILLING_PERIOD;
    if plan.price == 0 || meals == 0 {
        return None;
    }
    Some((f64::from(plan.price) / f64::from(meals)).round() as u32)
}

pub fn order_total(price: u32, delivery_fee: u32, discount: u32) -> u32 {
    (price + delivery_fee).saturating_sub(discount)
}

pub fn format_rupees(amount: u32) -> String {
    format!("₹{amount}")
}

/// Like [`format_rupees`] with thousands separators: `"₹24,580"`.
pub fn format_rupees_grouped(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("₹{grouped}")
}
