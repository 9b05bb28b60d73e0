use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoClock, GoFlame, GoStarFill},
};
use shared::{catalog::chef_by_id, pricing::format_rupees, types::Meal};

/// Number of tags shown on a card.
const CARD_TAGS: usize = 3;

#[component]
pub fn MealCard(
    meal: Meal,
    on_select: Option<EventHandler<Meal>>,
    #[props(default = true)] show_chef: bool,
) -> Element {
    let chef = chef_by_id(&meal.chef_id).filter(|_| show_chef);
    let selected = meal.clone();
    let meal_type = meal.meal_type.label();

    rsx! {
        div {
            class: "card meal-card",
            onclick: move |_| {
                if let Some(handler) = on_select {
                    handler.call(selected.clone());
                }
            },

            div {
                class: "meal-card-image",
                img { src: "{meal.image}", alt: "{meal.name}" }
                div {
                    class: "rating-pill",
                    Icon { width: 14, height: 14, icon: GoStarFill }
                    span { "{meal.rating}" }
                }
                span { class: "badge badge-green meal-type", "{meal_type}" }
            }

            div {
                padding: "16px",
                h3 { margin: "0", margin_bottom: "4px", "{meal.name}" }
                p { class: "muted clamp-2", "{meal.description}" }

                if let Some(chef) = chef {
                    div {
                        class: "row gap-8",
                        margin_bottom: "12px",
                        img { class: "avatar-xs", src: "{chef.photo}", alt: "{chef.name}" }
                        span { class: "muted small", "by {chef.name}" }
                    }
                }

                div {
                    class: "row gap-16 muted small",
                    margin_bottom: "12px",
                    div {
                        class: "row gap-4",
                        Icon { width: 14, height: 14, icon: GoFlame }
                        span { "{meal.nutrition.calories} cal" }
                    }
                    div {
                        class: "row gap-4",
                        Icon { width: 14, height: 14, icon: GoClock }
                        span { "30 min" }
                    }
                }

                div {
                    class: "row wrap gap-4",
                    margin_bottom: "12px",
                    for tag in meal.tags.iter().take(CARD_TAGS) {
                        span { key: "{tag}", class: "badge badge-outline", "{tag}" }
                    }
                }

                div {
                    class: "row space-between card-footer",
                    span { class: "price", {format_rupees(meal.price)} }
                    div {
                        class: "macro-grid small muted",
                        div { div { class: "faint", "P" } div { "{meal.nutrition.protein}g" } }
                        div { div { class: "faint", "C" } div { "{meal.nutrition.carbs}g" } }
                        div { div { class: "faint", "F" } div { "{meal.nutrition.fats}g" } }
                    }
                }
            }
        }
    }
}
