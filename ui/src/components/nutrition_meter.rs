use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::go_icons::GoFlame};
use shared::{nutrition::MacroSplit, types::NutritionInfo};

#[component]
pub fn NutritionMeter(
    nutrition: NutritionInfo,
    #[props(default = true)] detailed: bool,
) -> Element {
    if !detailed {
        return rsx! {
            div {
                class: "row gap-8 small",
                Icon { width: 14, height: 14, icon: GoFlame }
                span { class: "muted", "{nutrition.calories} cal" }
                span { class: "faint", "•" }
                span { class: "muted", "P: {nutrition.protein}g" }
                span { class: "muted", "C: {nutrition.carbs}g" }
                span { class: "muted", "F: {nutrition.fats}g" }
            }
        };
    }

    let split = MacroSplit::of(&nutrition);
    let rows = [
        ("Protein", nutrition.protein, split.protein, "bar-protein"),
        ("Carbs", nutrition.carbs, split.carbs, "bar-carbs"),
        ("Fats", nutrition.fats, split.fats, "bar-fats"),
    ];

    rsx! {
        div {
            class: "card",
            padding: "24px",

            div {
                class: "row space-between",
                margin_bottom: "24px",
                h3 { margin: "0", "Nutrition Breakdown" }
                div {
                    class: "row gap-8 accent-orange",
                    Icon { width: 18, height: 18, icon: GoFlame }
                    span { "{nutrition.calories} cal" }
                }
            }

            for (label, grams, percent, bar) in rows {
                div {
                    key: "{label}",
                    margin_bottom: "16px",
                    div {
                        class: "row space-between small",
                        margin_bottom: "8px",
                        span { "{label}" }
                        span { class: "muted", "{grams}g ({percent}%)" }
                    }
                    div {
                        class: "progress",
                        div { class: "progress-bar {bar}", width: "{percent}%" }
                    }
                }
            }
        }
    }
}
