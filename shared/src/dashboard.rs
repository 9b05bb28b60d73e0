#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::types::WeeklyNutrition;

/// Greeting for a local hour of day (0-23).
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Meals consumed against the weekly goal, as a whole percent.
pub fn weekly_progress(summary: &WeeklyNutrition) -> u32 {
    if summary.goal == 0 {
        return 0;
    }
    (f64::from(summary.meals_consumed) * 100.0 / f64::from(summary.goal)).round() as u32
}

pub struct ChefStats {
    pub today_orders: u32,
    pub weekly_revenue: u32,
    pub total_orders: u32,
    pub avg_rating: f32,
}

pub static CHEF_STATS: ChefStats = ChefStats {
    today_orders: 12,
    weekly_revenue: 24580,
    total_orders: 450,
    avg_rating: 4.8,
};

/// Progress shown on the dashboard's "order in progress" card.
pub const ACTIVE_ORDER_PROGRESS: u32 = 33;
/// Progress shown on the order tracking ETA card.
pub const TRACKING_PROGRESS: u32 = 65;

pub struct Activity {
    pub time: &'static str,
    pub action: &'static str,
    pub customer: &'static str,
    pub amount: Option<u32>,
}

/// Feed shown under the chef's menu, newest first.
pub static RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        time: "2 hours ago",
        action: "Order delivered",
        customer: "Sruthi K.",
        amount: Some(240),
    },
    Activity {
        time: "5 hours ago",
        action: "Order delivered",
        customer: "Rahul M.",
        amount: Some(180),
    },
    Activity {
        time: "Yesterday",
        action: "New review (5★)",
        customer: "Priya S.",
        amount: None,
    },
    Activity {
        time: "2 days ago",
        action: "Order delivered",
        customer: "Amit P.",
        amount: Some(320),
    },
];
