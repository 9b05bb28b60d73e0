#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use chrono::NaiveDateTime;

use crate::types::OrderStatus;

pub struct TimelineStep {
    pub status: OrderStatus,
    pub label: &'static str,
    pub description: &'static str,
}

/// Delivery progression shown on the tracking screen. Cancelled orders
/// never appear on it.
pub static TIMELINE: [TimelineStep; 4] = [
    TimelineStep {
        status: OrderStatus::Preparing,
        label: "Preparing",
        description: "Chef is cooking your meal",
    },
    TimelineStep {
        status: OrderStatus::Ready,
        label: "Ready",
        description: "Meal is ready for pickup",
    },
    TimelineStep {
        status: OrderStatus::OutForDelivery,
        label: "Out for Delivery",
        description: "On the way to you",
    },
    TimelineStep {
        status: OrderStatus::Delivered,
        label: "Delivered",
        description: "Enjoy your meal!",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

impl OrderStatus {
    pub fn timeline_position(self) -> Option<usize> {
        TIMELINE.iter().position(|step| step.status == self)
    }

    pub fn step_state(self, step_index: usize) -> StepState {
        match self.timeline_position() {
            Some(position) if step_index < position => StepState::Done,
            Some(position) if step_index == position => StepState::Current,
            _ => StepState::Pending,
        }
    }
}

/// `"Oct 14, 01:00 PM"`.
pub fn format_schedule(at: NaiveDateTime) -> String {
    at.format("%b %-d, %I:%M %p").to_string()
}
