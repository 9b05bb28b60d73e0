use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoLocation, GoPackage, GoStarFill},
};
use shared::types::Chef;

const CARD_SPECIALTIES: usize = 3;

#[component]
pub fn ChefCard(chef: Chef, on_select: Option<EventHandler<Chef>>) -> Element {
    let selected = chef.clone();

    rsx! {
        div {
            class: "card",
            padding: "24px",

            div {
                class: "row gap-16",
                align_items: "flex-start",
                margin_bottom: "16px",
                img { class: "avatar-md", src: "{chef.photo}", alt: "{chef.name}" }
                div {
                    flex: "1",
                    h3 { margin: "0", margin_bottom: "4px", "{chef.name}" }
                    div {
                        class: "row gap-4 small",
                        margin_bottom: "8px",
                        Icon { width: 14, height: 14, icon: GoStarFill }
                        span { "{chef.rating}" }
                        span { class: "muted", "({chef.total_orders} orders)" }
                    }
                    div {
                        class: "row gap-4 small muted",
                        Icon { width: 14, height: 14, icon: GoLocation }
                        span { "{chef.distance}" }
                    }
                }
            }

            p { class: "small muted", "{chef.bio}" }

            div {
                margin_bottom: "16px",
                div { class: "small faint", margin_bottom: "8px", "Cuisine" }
                div {
                    class: "row wrap gap-8",
                    for cuisine in chef.cuisine.iter() {
                        span { key: "{cuisine}", class: "badge badge-secondary", "{cuisine}" }
                    }
                }
            }

            div {
                margin_bottom: "16px",
                div { class: "small faint", margin_bottom: "8px", "Specialties" }
                div {
                    class: "row wrap gap-8",
                    for specialty in chef.specialties.iter().take(CARD_SPECIALTIES) {
                        span { key: "{specialty}", class: "badge badge-green-soft", "{specialty}" }
                    }
                }
            }

            div {
                class: "row gap-8 small muted",
                margin_bottom: "16px",
                Icon { width: 14, height: 14, icon: GoPackage }
                span { "Delivers to: {chef.delivery_area}" }
            }

            button {
                class: "btn btn-primary",
                width: "100%",
                onclick: move |_| {
                    if let Some(handler) = on_select {
                        handler.call(selected.clone());
                    }
                },
                "Order from this Chef"
            }
        }
    }
}
