mod chef_card;
mod meal_card;
mod navbar;
mod nutrition_meter;
mod order_timeline;

pub use chef_card::ChefCard;
pub use meal_card::MealCard;
pub use navbar::Navbar;
pub use nutrition_meter::NutritionMeter;
pub use order_timeline::OrderTimeline;
