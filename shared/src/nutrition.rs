#[cfg(test)]
#[path = "nutrition_test.rs"]
mod nutrition_test;

use crate::types::NutritionInfo;

/// Share of each macronutrient in the total macro grams, as whole percents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl MacroSplit {
    pub fn of(nutrition: &NutritionInfo) -> Self {
        let total = nutrition.protein + nutrition.carbs + nutrition.fats;
        if total == 0 {
            return Self::default();
        }
        let percent = |grams: u32| (f64::from(grams) * 100.0 / f64::from(total)).round() as u32;
        Self {
            protein: percent(nutrition.protein),
            carbs: percent(nutrition.carbs),
            fats: percent(nutrition.fats),
        }
    }
}
