#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Customer,
    Chef,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Chef => "chef",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single signed-in identity. Only ever synthesized by the mock
/// authenticator, never looked up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub photo: Option<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    pub subscription_plan_id: Option<String>,
    /// `None` for chefs, who do not hold meal credits.
    pub credits: Option<u32>,
}

impl User {
    pub fn is_chef(&self) -> bool {
        self.role == Role::Chef
    }

    pub fn credits_or_zero(&self) -> u32 {
        self.credits.unwrap_or(0)
    }

    /// Up to two uppercase initials, used when there is no photo.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chef {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub cuisine: Vec<String>,
    pub rating: f32,
    pub total_orders: u32,
    /// Human label such as `"2.5 km"`.
    pub distance: String,
    pub delivery_area: String,
    pub bio: String,
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    pub fn value(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal_type| meal_type.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub nutrition: NutritionInfo,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub chef_id: String,
    pub price: u32,
    pub rating: f32,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// CSS modifier used by status badges.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Preparing => "badge-preparing",
            Self::Ready => "badge-ready",
            Self::OutForDelivery => "badge-out-for-delivery",
            Self::Delivered => "badge-delivered",
            Self::Cancelled => "badge-cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub meal_id: String,
    pub customer_id: String,
    pub chef_id: String,
    pub scheduled_for: NaiveDateTime,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub special_instructions: Option<String>,
    pub total_amount: u32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub meals_per_week: u32,
    pub price: u32,
    pub credits: u32,
    pub benefits: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNutrition {
    pub total_calories: u32,
    pub avg_calories_per_day: u32,
    pub total_protein: u32,
    pub total_carbs: u32,
    pub total_fats: u32,
    pub meals_consumed: u32,
    pub goal: u32,
}
