use super::*;

fn macros(protein: u32, carbs: u32, fats: u32) -> NutritionInfo {
    NutritionInfo {
        calories: 0,
        protein,
        carbs,
        fats,
    }
}

#[test]
fn quinoa_bowl_split_rounds_to_nearest_percent() {
    let split = MacroSplit::of(&macros(18, 52, 14));
    assert_eq!(split, MacroSplit { protein: 21, carbs: 62, fats: 17 });
    assert_eq!(split.protein + split.carbs + split.fats, 100);
}

#[test]
fn split_sums_to_about_one_hundred() {
    for meal in crate::catalog::MEALS.iter() {
        let split = MacroSplit::of(&meal.nutrition);
        let sum = split.protein + split.carbs + split.fats;
        assert!((99..=101).contains(&sum), "{}: {sum}", meal.id);
    }
}

#[test]
fn zero_macros_split_to_zero() {
    assert_eq!(MacroSplit::of(&macros(0, 0, 0)), MacroSplit::default());
}
