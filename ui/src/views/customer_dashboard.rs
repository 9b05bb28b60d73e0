use chrono::{Local, Timelike};
use client::{router::Screen, session::use_session};
use dioxus::{logger::tracing::debug, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoCalendar, GoGraph, GoLightBulb, GoLocation, GoSkip, GoTools},
};
use shared::{
    catalog::{CHEFS, HEALTH_TIPS, MEALS, ORDERS, WEEKLY_NUTRITION, featured_meal},
    dashboard::{ACTIVE_ORDER_PROGRESS, greeting, weekly_progress},
};

use crate::components::{ChefCard, MealCard};

const UPCOMING_MEALS: usize = 4;
const TOP_CHEFS: usize = 3;

#[component]
pub fn CustomerDashboard(on_navigate: EventHandler<Screen>) -> Element {
    let session = use_session();
    let user = session.user();
    let name = user.as_ref().map(|user| user.name.clone()).unwrap_or_default();
    let credits = user.as_ref().map_or(0, |user| user.credits_or_zero());

    let salutation = greeting(Local::now().hour());
    let today = featured_meal();
    let active_order = ORDERS.first();
    let progress = weekly_progress(&WEEKLY_NUTRITION);

    rsx! {
        div {
            class: "page",

            div {
                margin_bottom: "32px",
                h1 { margin_bottom: "8px", "{salutation}, {name} 👋" }
                p { class: "muted", "You have {credits} meal credits remaining" }
            }

            div {
                class: "card card-hero",
                margin_bottom: "32px",

                div {
                    class: "row space-between",
                    margin_bottom: "16px",
                    div {
                        h2 { margin: "0", "Today's Lunch" }
                        p { margin: "0", "Scheduled for 1:00 PM" }
                    }
                }

                div {
                    class: "grid grid-2",
                    div {
                        h3 { "{today.name}" }
                        p { class: "small", "{today.description}" }
                        div {
                            class: "row gap-16 small",
                            div { div { class: "faint", "Calories" } div { "{today.nutrition.calories}" } }
                            div { div { class: "faint", "Protein" } div { "{today.nutrition.protein}g" } }
                            div { div { class: "faint", "Carbs" } div { "{today.nutrition.carbs}g" } }
                            div { div { class: "faint", "Fats" } div { "{today.nutrition.fats}g" } }
                        }
                    }
                    img { class: "hero-image", src: "{today.image}", alt: "{today.name}" }
                }

                div {
                    class: "grid grid-4",
                    margin_top: "24px",
                    button {
                        class: "btn btn-ghost-light",
                        onclick: move |_| on_navigate.call(Screen::MealCustomization),
                        Icon { width: 16, height: 16, icon: GoTools }
                        "Customize"
                    }
                    button {
                        class: "btn btn-orange",
                        onclick: move |_| on_navigate.call(Screen::MealCustomization),
                        Icon { width: 16, height: 16, icon: GoCalendar }
                        "Reschedule"
                    }
                    button {
                        class: "btn btn-ghost-light",
                        Icon { width: 16, height: 16, icon: GoSkip }
                        "Skip Meal"
                    }
                    button {
                        class: "btn btn-ghost-light",
                        onclick: move |_| on_navigate.call(Screen::Profile),
                        Icon { width: 16, height: 16, icon: GoLocation }
                        "Change Address"
                    }
                }
            }

            if active_order.is_some() {
                div {
                    class: "card",
                    padding: "24px",
                    margin_bottom: "32px",
                    div {
                        class: "row space-between",
                        margin_bottom: "16px",
                        div {
                            h3 { margin: "0", margin_bottom: "4px", "Order in Progress" }
                            p { class: "small muted", margin: "0", "Preparing your meal..." }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_navigate.call(Screen::OrderTracking),
                            "Track Order"
                        }
                    }
                    div {
                        class: "progress",
                        div { class: "progress-bar", width: "{ACTIVE_ORDER_PROGRESS}%" }
                    }
                }
            }

            div {
                class: "card",
                padding: "24px",
                margin_bottom: "32px",
                div {
                    class: "row gap-8",
                    margin_bottom: "16px",
                    Icon { width: 20, height: 20, icon: GoGraph }
                    h3 { margin: "0", "Your Weekly Nutrition" }
                }
                div {
                    class: "grid grid-4",
                    margin_bottom: "24px",
                    div {
                        div { class: "stat", "{WEEKLY_NUTRITION.avg_calories_per_day}" }
                        div { class: "small muted", "Avg Calories/Day" }
                    }
                    div {
                        div { class: "stat accent-green", "{WEEKLY_NUTRITION.total_protein}g" }
                        div { class: "small muted", "Total Protein" }
                    }
                    div {
                        div { class: "stat accent-orange", "{WEEKLY_NUTRITION.meals_consumed}/{WEEKLY_NUTRITION.goal}" }
                        div { class: "small muted", "Meals This Week" }
                    }
                    div {
                        div { class: "stat accent-blue", "{progress}%" }
                        div { class: "small muted", "Goal Progress" }
                    }
                }
                div { class: "small muted", margin_bottom: "8px", "Weekly Progress" }
                div {
                    class: "progress progress-lg",
                    div { class: "progress-bar", width: "{progress}%" }
                }
            }

            div {
                class: "grid grid-main-side",

                div {
                    div {
                        class: "row space-between",
                        margin_bottom: "24px",
                        h2 { margin: "0", "Upcoming Meals" }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| on_navigate.call(Screen::MealCustomization),
                            "View All"
                        }
                    }
                    div {
                        class: "grid grid-2",
                        for meal in MEALS.iter().take(UPCOMING_MEALS) {
                            MealCard {
                                key: "{meal.id}",
                                meal: meal.clone(),
                                on_select: move |meal: shared::types::Meal| {
                                    debug!("Selected meal '{}'", meal.id);
                                    on_navigate.call(Screen::MealCustomization);
                                },
                            }
                        }
                    }
                }

                div {
                    div {
                        class: "row gap-8",
                        margin_bottom: "16px",
                        Icon { width: 20, height: 20, icon: GoLightBulb }
                        h3 { margin: "0", "Health Tips" }
                    }
                    for tip in HEALTH_TIPS.iter() {
                        div {
                            key: "{tip.id}",
                            class: "card row gap-12",
                            align_items: "flex-start",
                            padding: "16px",
                            margin_bottom: "16px",
                            div { class: "tip-icon", "{tip.icon}" }
                            div {
                                h4 { margin: "0", margin_bottom: "4px", "{tip.title}" }
                                p { class: "small muted", margin: "0", "{tip.description}" }
                            }
                        }
                    }
                }
            }

            div {
                margin_top: "48px",
                div {
                    class: "row space-between",
                    margin_bottom: "24px",
                    h2 { margin: "0", "Top Rated Home Chefs" }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_navigate.call(Screen::ChefNetwork),
                        "View All"
                    }
                }
                div {
                    class: "grid grid-3",
                    for chef in CHEFS.iter().take(TOP_CHEFS) {
                        ChefCard {
                            key: "{chef.id}",
                            chef: chef.clone(),
                            on_select: move |chef: shared::types::Chef| {
                                debug!("Selected chef '{}'", chef.id);
                                on_navigate.call(Screen::ChefNetwork);
                            },
                        }
                    }
                }
            }
        }
    }
}
