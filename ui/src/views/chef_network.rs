use client::router::Screen;
use dioxus::{logger::tracing::debug, prelude::*};
use dioxus_free_icons::{Icon, icons::go_icons::GoSearch};
use shared::{
    catalog::{CHEFS, all_cuisines},
    chef_network::{ChefQuery, CuisineFilter, SortKey, result_label, visible_chefs},
    types::Chef,
};

use crate::components::ChefCard;

#[component]
pub fn ChefNetwork(on_navigate: EventHandler<Screen>) -> Element {
    let mut query = use_signal(ChefQuery::default);

    let visible = visible_chefs(&CHEFS, &query.read());
    let label = result_label(visible.len());
    let cuisines = all_cuisines();
    let chef_count = CHEFS.len();

    rsx! {
        div {
            class: "page",

            div {
                margin_bottom: "32px",
                h1 { margin_bottom: "8px", "Our Chef Network" }
                p { class: "muted", "Connect with talented home chefs in your area" }
            }

            div {
                class: "grid grid-4",
                margin_bottom: "32px",
                div { class: "card text-center", padding: "24px", div { class: "stat accent-green", "{chef_count}" } div { class: "small muted", "Verified Chefs" } }
                div { class: "card text-center", padding: "24px", div { class: "stat accent-orange", "4.8" } div { class: "small muted", "Average Rating" } }
                div { class: "card text-center", padding: "24px", div { class: "stat accent-blue", "2000+" } div { class: "small muted", "Total Orders" } }
                div { class: "card text-center", padding: "24px", div { class: "stat accent-purple", "12" } div { class: "small muted", "Cuisine Types" } }
            }

            div {
                class: "card grid grid-4",
                padding: "24px",
                margin_bottom: "32px",

                div {
                    class: "span-2 search-field",
                    Icon { width: 18, height: 18, icon: GoSearch }
                    input {
                        placeholder: "Search by chef name, cuisine, or specialty...",
                        value: query.read().search.clone(),
                        oninput: move |event| query.write().search = event.value(),
                    }
                }

                select {
                    value: query.read().cuisine.value().to_owned(),
                    onchange: move |event| query.write().cuisine = CuisineFilter::from_value(&event.value()),
                    option { value: CuisineFilter::ALL_VALUE, "All Cuisines" }
                    for cuisine in cuisines {
                        option { key: "{cuisine}", value: cuisine, "{cuisine}" }
                    }
                }

                select {
                    value: query.read().sort.value(),
                    onchange: move |event| query.write().sort = SortKey::from_value(&event.value()),
                    for (sort, text) in SortKey::OPTIONS {
                        option { value: sort.value(), "{text}" }
                    }
                }
            }

            p { class: "muted", margin_bottom: "24px", "{label}" }

            if visible.is_empty() {
                div {
                    class: "empty-state",
                    div { class: "icon-circle icon-circle-lg", Icon { width: 32, height: 32, icon: GoSearch } }
                    h3 { "No chefs found" }
                    p { class: "muted", "Try adjusting your search or filters" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let mut query = query.write();
                            query.search.clear();
                            query.cuisine = CuisineFilter::All;
                        },
                        "Clear Filters"
                    }
                }
            } else {
                div {
                    class: "grid grid-3",
                    for chef in visible {
                        ChefCard {
                            key: "{chef.id}",
                            chef: chef.clone(),
                            on_select: move |chef: Chef| {
                                debug!("Ordering from chef '{}'", chef.id);
                                on_navigate.call(Screen::MealCustomization);
                            },
                        }
                    }
                }
            }

            div {
                class: "cta-banner",
                h2 { "Are you a home chef?" }
                p {
                    "Join our network and share your passion for cooking with hundreds of food lovers. "
                    "Earn money doing what you love, on your own schedule."
                }
                button { class: "btn btn-secondary btn-lg", "Join as a Chef" }
            }
        }
    }
}
