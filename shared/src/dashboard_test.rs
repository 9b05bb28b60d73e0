use super::*;
use crate::catalog::WEEKLY_NUTRITION;

#[test]
fn greeting_follows_hour_boundaries() {
    assert_eq!(greeting(0), "Good Morning");
    assert_eq!(greeting(11), "Good Morning");
    assert_eq!(greeting(12), "Good Afternoon");
    assert_eq!(greeting(16), "Good Afternoon");
    assert_eq!(greeting(17), "Good Evening");
    assert_eq!(greeting(23), "Good Evening");
}

#[test]
fn weekly_progress_of_sample_week() {
    assert_eq!(weekly_progress(&WEEKLY_NUTRITION), 86);
}

#[test]
fn weekly_progress_without_goal_is_zero() {
    let summary = WeeklyNutrition {
        goal: 0,
        ..WEEKLY_NUTRITION
    };
    assert_eq!(weekly_progress(&summary), 0);
}
