use super::*;

fn draft(name: &str, price: &str) -> MealDraft {
    MealDraft {
        name: name.to_owned(),
        price: price.to_owned(),
        ..MealDraft::default()
    }
}

#[test]
fn initial_menu_takes_first_catalog_meals() {
    let menu = initial_menu();
    assert_eq!(menu.len(), INITIAL_MENU_SIZE);
    assert_eq!(menu[0].id, "meal-1");
}

#[test]
fn valid_draft_becomes_meal() {
    let meal = MealDraft {
        name: "  Ragi Mudde ".to_owned(),
        description: "Finger millet balls".to_owned(),
        meal_type: MealType::Dinner,
        price: "130".to_owned(),
        calories: "310".to_owned(),
        protein: "".to_owned(),
        carbs: "58".to_owned(),
        fats: " ".to_owned(),
        image: String::new(),
        ingredients: "Ragi, , Ghee ".to_owned(),
    }
    .into_meal("menu-1".to_owned(), "chef-1")
    .unwrap();
    assert_eq!(meal.name, "Ragi Mudde");
    assert_eq!(meal.price, 130);
    assert_eq!(meal.meal_type, MealType::Dinner);
    assert_eq!(meal.nutrition.calories, 310);
    assert_eq!(meal.nutrition.protein, 0);
    assert_eq!(meal.nutrition.carbs, 58);
    assert_eq!(meal.nutrition.fats, 0);
    assert_eq!(meal.chef_id, "chef-1");
    assert_eq!(meal.ingredients, ["Ragi", "Ghee"]);
}

#[test]
fn draft_requires_name() {
    let err = draft("   ", "100").into_meal("m".to_owned(), "chef-1").unwrap_err();
    assert_eq!(err, "Meal name is a required field");
}

#[test]
fn draft_rejects_bad_prices() {
    assert!(draft("Idli", "abc").into_meal("m".to_owned(), "c").is_err());
    assert!(draft("Idli", "0").into_meal("m".to_owned(), "c").is_err());
    assert!(draft("Idli", "999999").into_meal("m".to_owned(), "c").is_err());
}

#[test]
fn draft_rejects_non_numeric_nutrition() {
    let mut input = draft("Idli", "60");
    input.protein = "lots".to_owned();
    assert_eq!(
        input.into_meal("m".to_owned(), "c").unwrap_err(),
        "Protein must be a whole number"
    );
}

#[test]
fn remove_meal_reports_whether_anything_changed() {
    let mut menu = initial_menu();
    assert!(remove_meal(&mut menu, "meal-2"));
    assert_eq!(menu.len(), INITIAL_MENU_SIZE - 1);
    assert!(!remove_meal(&mut menu, "meal-2"));
}

#[test]
fn draft_rejects_overlong_description() {
    let mut input = draft("Idli", "60");
    input.description = "x".repeat(LIMITS.max_meal_description_length + 1);
    assert_eq!(
        input.into_meal("m".to_owned(), "c").unwrap_err(),
        "Description is too long"
    );
}
