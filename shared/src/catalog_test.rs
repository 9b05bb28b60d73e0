use super::*;

// =============================================================
// Sample data shape
// =============================================================

#[test]
fn featured_meal_is_grilled_chicken_bowl() {
    assert_eq!(featured_meal().name, "Grilled Chicken Power Bowl");
    assert_eq!(featured_meal().price, 240);
}

#[test]
fn every_meal_references_a_known_chef() {
    for meal in MEALS.iter() {
        assert!(chef_by_id(&meal.chef_id).is_some(), "{} has no chef", meal.id);
    }
}

#[test]
fn every_order_references_known_meal_and_chef() {
    for order in ORDERS.iter() {
        assert!(meal_by_id(&order.meal_id).is_some());
        assert!(chef_by_id(&order.chef_id).is_some());
    }
}

#[test]
fn only_health_pro_is_popular() {
    let popular: Vec<&str> = PLANS
        .iter()
        .filter(|plan| plan.popular)
        .map(|plan| plan.name.as_str())
        .collect();
    assert_eq!(popular, ["Health Pro"]);
}

#[test]
fn lookups_miss_on_unknown_ids() {
    assert!(chef_by_id("chef-99").is_none());
    assert!(meal_by_id("").is_none());
    assert!(plan_by_id("plan-0").is_none());
}

// =============================================================
// Derived collections
// =============================================================

#[test]
fn meals_of_type_filters_by_meal_time() {
    let breakfasts: Vec<&str> = meals_of_type(MealType::Breakfast)
        .iter()
        .map(|meal| meal.id.as_str())
        .collect();
    assert_eq!(breakfasts, ["meal-2", "meal-3", "meal-7"]);
    assert_eq!(meals_of_type(MealType::Dinner).len(), 2);
}

#[test]
fn all_cuisines_are_distinct_in_first_seen_order() {
    let cuisines = all_cuisines();
    assert_eq!(cuisines.len(), 8);
    assert_eq!(cuisines[0], "North Indian");
    assert_eq!(cuisines[3], "Kerala Style");
}

// =============================================================
// Demo users
// =============================================================

#[test]
fn demo_customer_holds_plan_and_credits() {
    let user = demo_customer();
    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.credits, Some(45));
    assert_eq!(
        plan_by_id(user.subscription_plan_id.as_deref().unwrap()).unwrap().name,
        "Health Pro"
    );
    assert_eq!(user.addresses.len(), 2);
}

#[test]
fn demo_chef_keeps_given_email() {
    let user = demo_chef("someone@kitchen.in");
    assert_eq!(user.id, DEMO_CHEF_ID);
    assert_eq!(user.name, "Priya Sharma");
    assert_eq!(user.email, "someone@kitchen.in");
    assert_eq!(user.credits, None);
}
