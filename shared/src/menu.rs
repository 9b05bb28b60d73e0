//! The chef dashboard's editable menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::{
    limits::LIMITS,
    types::{Meal, MealType, NutritionInfo},
};

/// Number of catalog meals a chef's menu starts with.
pub const INITIAL_MENU_SIZE: usize = 4;

pub fn initial_menu() -> Vec<Meal> {
    crate::catalog::MEALS
        .iter()
        .take(INITIAL_MENU_SIZE)
        .cloned()
        .collect()
}

/// Raw input of the "add new meal" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDraft {
    pub name: String,
    pub description: String,
    pub meal_type: MealType,
    pub price: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub image: String,
    /// Comma separated.
    pub ingredients: String,
}

impl MealDraft {
    /// Turns the form into a menu item, or explains the first invalid field.
    pub fn into_meal(self, id: String, chef_id: &str) -> Result<Meal, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Meal name is a required field".to_owned());
        }
        if name.len() > LIMITS.max_meal_name_length {
            return Err("Meal name is too long".to_owned());
        }
        if self.description.trim().len() > LIMITS.max_meal_description_length {
            return Err("Description is too long".to_owned());
        }
        let Ok(price) = self.price.trim().parse::<u32>() else {
            return Err("Price must be a whole number of rupees".to_owned());
        };
        if price == 0 || price > LIMITS.max_meal_price {
            return Err(format!(
                "Price must be between 1 and {}",
                LIMITS.max_meal_price
            ));
        }
        let calories = parse_optional(&self.calories, "Calories")?;
        let protein = parse_optional(&self.protein, "Protein")?;
        let carbs = parse_optional(&self.carbs, "Carbs")?;
        let fats = parse_optional(&self.fats, "Fats")?;

        Ok(Meal {
            id,
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            image: self.image.trim().to_owned(),
            nutrition: NutritionInfo {
                calories,
                protein,
                carbs,
                fats,
            },
            meal_type: self.meal_type,
            chef_id: chef_id.to_owned(),
            price,
            rating: 0.0,
            tags: vec![],
            ingredients: self
                .ingredients
                .split(',')
                .map(str::trim)
                .filter(|ingredient| !ingredient.is_empty())
                .map(str::to_owned)
                .collect(),
        })
    }
}

fn parse_optional(value: &str, field: &str) -> Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|_| format!("{field} must be a whole number"))
}

pub fn remove_meal(menu: &mut Vec<Meal>, meal_id: &str) -> bool {
    let before = menu.len();
    menu.retain(|meal| meal.id != meal_id);
    menu.len() != before
}
