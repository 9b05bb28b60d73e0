//! Hand-authored sample data shared by every screen.
//!
//! Everything here is read-only; the only records ever synthesized at
//! runtime are the signed-in users built by [`demo_customer`] and
//! [`demo_chef`].

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{
    Chef, HealthTip, Meal, MealType, NutritionInfo, Order, OrderStatus, Role, SubscriptionPlan,
    User, WeeklyNutrition,
};

pub const DEMO_CUSTOMER_ID: &str = "user-1";
pub const DEMO_CHEF_ID: &str = "chef-1";

/// Index of the meal featured on the dashboard, payment and customization screens.
pub const FEATURED_MEAL_INDEX: usize = 5;

pub const DIETARY_OPTIONS: [&str; 7] = [
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Low Carb",
    "High Protein",
    "Keto",
    "Paleo",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

pub static CHEFS: LazyLock<Vec<Chef>> = LazyLock::new(|| {
    vec![
        Chef {
            id: "chef-1".to_owned(),
            name: "Priya Sharma".to_owned(),
            photo: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400".to_owned(),
            cuisine: strings(&["North Indian", "Healthy Bowls"]),
            rating: 4.8,
            total_orders: 450,
            distance: "2.5 km".to_owned(),
            delivery_area: "Indiranagar, Koramangala".to_owned(),
            bio: "Passionate about creating nutritious, home-cooked meals with fresh ingredients."
                .to_owned(),
            specialties: strings(&["Quinoa Bowls", "Dal Tadka", "Whole Wheat Roti"]),
        },
        Chef {
            id: "chef-2".to_owned(),
            name: "Arjun Menon".to_owned(),
            photo: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400".to_owned(),
            cuisine: strings(&["South Indian", "Kerala Style"]),
            rating: 4.9,
            total_orders: 620,
            distance: "1.8 km".to_owned(),
            delivery_area: "HSR Layout, BTM".to_owned(),
            bio: "Bringing authentic Kerala flavors with a healthy twist to your doorstep."
                .to_owned(),
            specialties: strings(&["Avial", "Brown Rice Dosa", "Fish Curry"]),
        },
        Chef {
            id: "chef-3".to_owned(),
            name: "Meera Patel".to_owned(),
            photo: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400".to_owned(),
            cuisine: strings(&["Gujarati", "Jain"]),
            rating: 4.7,
            total_orders: 380,
            distance: "3.2 km".to_owned(),
            delivery_area: "Whitefield, Marathahalli".to_owned(),
            bio: "Specializing in sattvic, pure vegetarian meals for a balanced lifestyle."
                .to_owned(),
            specialties: strings(&["Khichdi", "Dhokla", "Thepla"]),
        },
        Chef {
            id: "chef-4".to_owned(),
            name: "Vikram Singh".to_owned(),
            photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400".to_owned(),
            cuisine: strings(&["Protein Bowls", "Fitness Meals"]),
            rating: 4.9,
            total_orders: 550,
            distance: "2.0 km".to_owned(),
            delivery_area: "Bellandur, Sarjapur Road".to_owned(),
            bio: "Former athlete, now cooking high-protein, low-carb meals for fitness enthusiasts."
                .to_owned(),
            specialties: strings(&[
                "Grilled Chicken Bowl",
                "Egg White Omelette",
                "Protein Smoothie Bowl",
            ]),
        },
    ]
});

#[allow(clippy::too_many_arguments)]
fn meal(
    id: &str,
    name: &str,
    description: &str,
    image: &str,
    nutrition: [u32; 4],
    meal_type: MealType,
    chef_id: &str,
    price: u32,
    rating: f32,
    tags: &[&str],
    ingredients: &[&str],
) -> Meal {
    let [calories, protein, carbs, fats] = nutrition;
    Meal {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        nutrition: NutritionInfo {
            calories,
            protein,
            carbs,
            fats,
        },
        meal_type,
        chef_id: chef_id.to_owned(),
        price,
        rating,
        tags: strings(tags),
        ingredients: strings(ingredients),
    }
}

pub static MEALS: LazyLock<Vec<Meal>> = LazyLock::new(|| {
    vec![
        meal(
            "meal-1",
            "Quinoa & Veggie Power Bowl",
            "Protein-rich quinoa with roasted vegetables, chickpeas, and tahini dressing",
            "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=600",
            [420, 18, 52, 14],
            MealType::Lunch,
            "chef-1",
            180,
            4.7,
            &["High Protein", "Vegan", "Gluten-Free"],
            &["Quinoa", "Chickpeas", "Broccoli", "Bell Peppers", "Tahini", "Lemon"],
        ),
        meal(
            "meal-2",
            "Masala Oats with Vegetables",
            "Savory oats cooked with fresh vegetables and Indian spices",
            "https://images.unsplash.com/photo-1588137378633-dea1336ce1e2?w=600",
            [280, 12, 45, 8],
            MealType::Breakfast,
            "chef-1",
            120,
            4.6,
            &["High Fiber", "Vegetarian", "Low Fat"],
            &["Oats", "Carrots", "Peas", "Onions", "Tomatoes", "Turmeric", "Cumin"],
        ),
        meal(
            "meal-3",
            "Brown Rice Dosa with Sambar",
            "Crispy fermented brown rice dosa with protein-rich lentil sambar",
            "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8?w=600",
            [350, 14, 58, 9],
            MealType::Breakfast,
            "chef-2",
            140,
            4.9,
            &["Fermented", "Probiotic", "South Indian"],
            &["Brown Rice", "Urad Dal", "Toor Dal", "Vegetables", "Tamarind", "Spices"],
        ),
        meal(
            "meal-4",
            "Kerala Fish Curry with Red Rice",
            "Traditional fish curry with coconut milk, served with nutritious red rice",
            "https://images.unsplash.com/photo-1585032226651-759b368d7246?w=600",
            [480, 35, 48, 16],
            MealType::Lunch,
            "chef-2",
            220,
            4.8,
            &["High Protein", "Omega-3", "Kerala Style"],
            &["Fresh Fish", "Coconut Milk", "Curry Leaves", "Red Rice", "Turmeric", "Kokum"],
        ),
        meal(
            "meal-5",
            "Moong Dal Khichdi with Ghee",
            "Comforting one-pot meal with split mung beans and basmati rice",
            "https://images.unsplash.com/photo-1596797038530-2c107229654b?w=600",
            [320, 16, 50, 10],
            MealType::Dinner,
            "chef-3",
            150,
            4.7,
            &["Easy Digest", "Comfort Food", "Ayurvedic"],
            &["Moong Dal", "Basmati Rice", "Ghee", "Cumin", "Ginger", "Turmeric"],
        ),
        meal(
            "meal-6",
            "Grilled Chicken Power Bowl",
            "Lean grilled chicken breast with quinoa, greens, and avocado",
            "https://images.unsplash.com/photo-1604909052743-94e838986d24?w=600",
            [520, 45, 38, 18],
            MealType::Lunch,
            "chef-4",
            240,
            4.9,
            &["High Protein", "Low Carb", "Fitness"],
            &["Chicken Breast", "Quinoa", "Spinach", "Avocado", "Cherry Tomatoes", "Lemon"],
        ),
        meal(
            "meal-7",
            "Egg White & Veggie Omelette",
            "Fluffy egg white omelette loaded with fresh vegetables",
            "https://images.unsplash.com/photo-1525351484163-7529414344d8?w=600",
            [220, 24, 12, 8],
            MealType::Breakfast,
            "chef-4",
            140,
            4.6,
            &["High Protein", "Low Carb", "Keto Friendly"],
            &["Egg Whites", "Bell Peppers", "Mushrooms", "Spinach", "Onions", "Herbs"],
        ),
        meal(
            "meal-8",
            "Whole Wheat Roti with Dal Tadka",
            "Freshly made whole wheat rotis with creamy yellow lentil tadka",
            "https://images.unsplash.com/photo-1585937421612-70e008356f9b?w=600",
            [380, 18, 62, 10],
            MealType::Dinner,
            "chef-1",
            160,
            4.8,
            &["High Fiber", "Vegetarian", "Traditional"],
            &["Whole Wheat Flour", "Toor Dal", "Ghee", "Cumin", "Garlic", "Tomatoes"],
        ),
    ]
});

pub static ORDERS: LazyLock<Vec<Order>> = LazyLock::new(|| {
    vec![
        Order {
            id: "order-1".to_owned(),
            meal_id: "meal-6".to_owned(),
            customer_id: DEMO_CUSTOMER_ID.to_owned(),
            chef_id: "chef-4".to_owned(),
            scheduled_for: at(2025, 10, 14, 13, 0),
            status: OrderStatus::Preparing,
            delivery_address: "123 Green Valley Apartments, Koramangala, Bangalore".to_owned(),
            special_instructions: Some("Extra vegetables, less oil".to_owned()),
            total_amount: 240,
            created_at: at(2025, 10, 14, 10, 30),
        },
        Order {
            id: "order-2".to_owned(),
            meal_id: "meal-2".to_owned(),
            customer_id: DEMO_CUSTOMER_ID.to_owned(),
            chef_id: "chef-1".to_owned(),
            scheduled_for: at(2025, 10, 15, 8, 30),
            status: OrderStatus::Preparing,
            delivery_address: "123 Green Valley Apartments, Koramangala, Bangalore".to_owned(),
            special_instructions: None,
            total_amount: 120,
            created_at: at(2025, 10, 14, 9, 0),
        },
    ]
});

pub static PLANS: LazyLock<Vec<SubscriptionPlan>> = LazyLock::new(|| {
    vec![
        SubscriptionPlan {
            id: "plan-1".to_owned(),
            name: "Starter".to_owned(),
            duration: "1 Week".to_owned(),
            meals_per_week: 7,
            price: 899,
            credits: 7,
            benefits: strings(&[
                "7 meals per week",
                "Choose any meal type",
                "Free delivery",
                "Basic nutrition tracking",
            ]),
            popular: false,
        },
        SubscriptionPlan {
            id: "plan-2".to_owned(),
            name: "Health Pro".to_owned(),
            duration: "1 Month".to_owned(),
            meals_per_week: 14,
            price: 2999,
            credits: 60,
            benefits: strings(&[
                "14 meals per week",
                "Priority delivery",
                "Advanced nutrition insights",
                "Meal customization",
                "Save 20%",
            ]),
            popular: true,
        },
        SubscriptionPlan {
            id: "plan-3".to_owned(),
            name: "Fitness Elite".to_owned(),
            duration: "3 Months".to_owned(),
            meals_per_week: 21,
            price: 7999,
            credits: 270,
            benefits: strings(&[
                "21 meals per week (all meals)",
                "Dedicated chef support",
                "Custom meal plans",
                "Weekly nutrition consultation",
                "Save 35%",
            ]),
            popular: false,
        },
        SubscriptionPlan {
            id: "plan-4".to_owned(),
            name: "Pay As You Go".to_owned(),
            duration: "Flexible".to_owned(),
            meals_per_week: 0,
            price: 0,
            credits: 0,
            benefits: strings(&[
                "No commitment",
                "Order individual meals",
                "Pay per meal",
                "Basic delivery",
            ]),
            popular: false,
        },
    ]
});

pub static HEALTH_TIPS: LazyLock<Vec<HealthTip>> = LazyLock::new(|| {
    [
        (
            "tip-1",
            "Stay Hydrated",
            "Drink at least 8 glasses of water daily for better digestion and energy.",
            "💧",
        ),
        (
            "tip-2",
            "Protein Power",
            "Include protein in every meal to maintain muscle mass and stay fuller longer.",
            "💪",
        ),
        (
            "tip-3",
            "Colorful Plate",
            "Eat a variety of colorful vegetables to get diverse nutrients and antioxidants.",
            "🥗",
        ),
        (
            "tip-4",
            "Mindful Eating",
            "Eat slowly and savor your food. It takes 20 minutes for your brain to register fullness.",
            "🧘",
        ),
    ]
    .into_iter()
    .map(|(id, title, description, icon)| HealthTip {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
    })
    .collect()
});

pub static WEEKLY_NUTRITION: WeeklyNutrition = WeeklyNutrition {
    total_calories: 9800,
    avg_calories_per_day: 1400,
    total_protein: 420,
    total_carbs: 1260,
    total_fats: 280,
    meals_consumed: 12,
    goal: 14,
};

/// The canned customer every customer login resolves to.
pub fn demo_customer() -> User {
    User {
        id: DEMO_CUSTOMER_ID.to_owned(),
        name: "Sruthi".to_owned(),
        email: "sruthi@example.com".to_owned(),
        phone: "+91 98765 43210".to_owned(),
        role: Role::Customer,
        photo: Some(
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200".to_owned(),
        ),
        addresses: strings(&[
            "123 Green Valley Apartments, Koramangala, Bangalore",
            "456 Tech Park Road, Whitefield, Bangalore",
        ]),
        dietary_preferences: strings(&["Vegetarian", "Low Carb"]),
        subscription_plan_id: Some("plan-2".to_owned()),
        credits: Some(45),
    }
}

/// The fixed chef profile every chef login resolves to, carrying the
/// email that was typed in.
pub fn demo_chef(email: &str) -> User {
    User {
        id: DEMO_CHEF_ID.to_owned(),
        name: "Priya Sharma".to_owned(),
        email: email.to_owned(),
        phone: "+91 98765 11111".to_owned(),
        role: Role::Chef,
        photo: Some(
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200".to_owned(),
        ),
        addresses: vec![],
        dietary_preferences: vec![],
        subscription_plan_id: None,
        credits: None,
    }
}

pub fn featured_meal() -> &'static Meal {
    &MEALS[FEATURED_MEAL_INDEX]
}

pub fn chef_by_id(id: &str) -> Option<&'static Chef> {
    CHEFS.iter().find(|chef| chef.id == id)
}

pub fn meal_by_id(id: &str) -> Option<&'static Meal> {
    MEALS.iter().find(|meal| meal.id == id)
}

pub fn plan_by_id(id: &str) -> Option<&'static SubscriptionPlan> {
    PLANS.iter().find(|plan| plan.id == id)
}

pub fn meals_of_type(meal_type: MealType) -> Vec<&'static Meal> {
    MEALS
        .iter()
        .filter(|meal| meal.meal_type == meal_type)
        .collect()
}

/// Distinct cuisine tags across all chefs, in first-seen order.
pub fn all_cuisines() -> Vec<&'static str> {
    let mut cuisines: Vec<&'static str> = vec![];
    for chef in CHEFS.iter() {
        for cuisine in &chef.cuisine {
            if !cuisines.contains(&cuisine.as_str()) {
                cuisines.push(cuisine.as_str());
            }
        }
    }
    cuisines
}
