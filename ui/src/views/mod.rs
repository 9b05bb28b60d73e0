mod auth;
mod chef_dashboard;
mod chef_network;
mod customer_dashboard;
mod landing;
mod meal_customization;
mod order_tracking;
mod payment;
mod profile;
mod subscription_plans;

pub use auth::Auth;
pub use chef_dashboard::ChefDashboard;
pub use chef_network::ChefNetwork;
pub use customer_dashboard::CustomerDashboard;
pub use landing::Landing;
pub use meal_customization::MealCustomization;
pub use order_tracking::OrderTracking;
pub use payment::Payment;
pub use profile::Profile;
pub use subscription_plans::SubscriptionPlans;
