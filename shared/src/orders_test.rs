use super::*;
use crate::catalog::ORDERS;

#[test]
fn timeline_positions_follow_delivery_order() {
    assert_eq!(OrderStatus::Preparing.timeline_position(), Some(0));
    assert_eq!(OrderStatus::OutForDelivery.timeline_position(), Some(2));
    assert_eq!(OrderStatus::Delivered.timeline_position(), Some(3));
    assert_eq!(OrderStatus::Cancelled.timeline_position(), None);
}

#[test]
fn step_states_split_around_current_status() {
    let status = OrderStatus::Ready;
    assert_eq!(status.step_state(0), StepState::Done);
    assert_eq!(status.step_state(1), StepState::Current);
    assert_eq!(status.step_state(2), StepState::Pending);
    assert_eq!(status.step_state(3), StepState::Pending);
}

#[test]
fn cancelled_orders_have_no_active_steps() {
    for index in 0..TIMELINE.len() {
        assert_eq!(OrderStatus::Cancelled.step_state(index), StepState::Pending);
    }
}

#[test]
fn schedule_formats_month_day_and_time() {
    assert_eq!(format_schedule(ORDERS[0].scheduled_for), "Oct 14, 01:00 PM");
    assert_eq!(format_schedule(ORDERS[1].scheduled_for), "Oct 15, 08:30 AM");
}
