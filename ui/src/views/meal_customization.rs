use client::{router::Screen, session::use_session};
use dioxus::{logger::tracing::info, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoCalendar, GoClock, GoComment, GoLocation, GoStarFill},
};
use shared::{
    catalog::{chef_by_id, featured_meal, meals_of_type},
    limits::LIMITS,
    pricing::{format_rupees, order_total},
    schedule::{DEFAULT_DATE, DEFAULT_SLOT, DELIVERY_DATES, DELIVERY_SLOTS, slot_label},
    types::{Meal, MealType},
};

use crate::components::{MealCard, NutritionMeter};

#[component]
pub fn MealCustomization(on_navigate: EventHandler<Screen>) -> Element {
    let session = use_session();
    let addresses = session.user().map(|user| user.addresses).unwrap_or_default();

    let mut meal_type = use_signal(MealType::default);
    let mut selected: Signal<Meal> = use_signal(|| featured_meal().clone());
    let mut date = use_signal(|| DEFAULT_DATE.to_owned());
    let mut slot = use_signal(|| DEFAULT_SLOT.to_owned());
    let first_address = addresses.first().cloned().unwrap_or_default();
    let mut address = use_signal(move || first_address);
    let mut instructions = use_signal(String::new);

    let options = meals_of_type(meal_type());
    let heading = format!("Available {} Options", meal_type().label());
    let total = order_total(selected.read().price, 0, 0);

    rsx! {
        div {
            class: "page",

            div {
                margin_bottom: "32px",
                h1 { margin_bottom: "8px", "Customize Your Meal" }
                p { class: "muted", "Choose healthy meals and set your preferences" }
            }

            div {
                class: "grid grid-main-side",

                div {
                    div {
                        class: "tabs",
                        margin_bottom: "24px",
                        for tab in MealType::ALL {
                            button {
                                class: if meal_type() == tab { "tab active" } else { "tab" },
                                onclick: move |_| meal_type.set(tab),
                                {tab.label()}
                            }
                        }
                    }

                    h2 { "{heading}" }
                    div {
                        class: "grid grid-2",
                        margin_bottom: "32px",
                        for meal in options {
                            div {
                                key: "{meal.id}",
                                class: if selected.read().id == meal.id { "selectable selected" } else { "selectable" },
                                MealCard {
                                    meal: meal.clone(),
                                    on_select: move |meal: Meal| {
                                        info!("Selected meal '{}'", meal.id);
                                        selected.set(meal);
                                    },
                                }
                            }
                        }
                    }

                    SelectedMealDetails { meal: selected() }
                }

                div {
                    class: "card sticky",
                    padding: "24px",
                    h3 { margin_top: "0", margin_bottom: "24px", "Delivery Details" }

                    div {
                        margin_bottom: "16px",
                        label {
                            class: "label row gap-8",
                            Icon { width: 16, height: 16, icon: GoCalendar }
                            "Delivery Date"
                        }
                        select {
                            value: date(),
                            onchange: move |event| date.set(event.value()),
                            for (value, label) in DELIVERY_DATES {
                                option { value, selected: date() == value, "{label}" }
                            }
                        }
                    }

                    div {
                        margin_bottom: "16px",
                        label {
                            class: "label row gap-8",
                            Icon { width: 16, height: 16, icon: GoClock }
                            "Delivery Time"
                        }
                        select {
                            value: slot(),
                            onchange: move |event| slot.set(event.value()),
                            for value in DELIVERY_SLOTS {
                                option {
                                    value,
                                    selected: slot() == value,
                                    {slot_label(value).unwrap_or_else(|| value.to_owned())}
                                }
                            }
                        }
                    }

                    div {
                        margin_bottom: "16px",
                        label {
                            class: "label row gap-8",
                            Icon { width: 16, height: 16, icon: GoLocation }
                            "Delivery Address"
                        }
                        if addresses.is_empty() {
                            p { class: "small muted", "No saved addresses yet" }
                        } else {
                            select {
                                value: address(),
                                onchange: move |event| address.set(event.value()),
                                for saved in addresses.iter() {
                                    option {
                                        key: "{saved}",
                                        value: "{saved}",
                                        selected: address() == *saved,
                                        "{saved}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        margin_bottom: "24px",
                        label {
                            class: "label row gap-8",
                            Icon { width: 16, height: 16, icon: GoComment }
                            "Special Instructions (Optional)"
                        }
                        textarea {
                            placeholder: "e.g., Less spicy, Add salad, Extra vegetables...",
                            maxlength: LIMITS.max_instructions_length as i64,
                            value: instructions(),
                            oninput: move |event| instructions.set(event.value()),
                        }
                    }

                    div {
                        class: "summary",
                        div {
                            class: "row space-between",
                            span { class: "muted", "Meal Price" }
                            span { {format_rupees(selected.read().price)} }
                        }
                        div {
                            class: "row space-between",
                            span { class: "muted", "Delivery Fee" }
                            span { class: "accent-green", "Free" }
                        }
                        div {
                            class: "row space-between summary-total",
                            span { "Total" }
                            span { {format_rupees(total)} }
                        }
                    }

                    div {
                        class: "stack",
                        button {
                            class: "btn btn-primary",
                            width: "100%",
                            onclick: move |_| {
                                info!(
                                    "Confirming '{}' for {} at {}",
                                    selected.read().id,
                                    date(),
                                    slot()
                                );
                                on_navigate.call(Screen::Payment);
                            },
                            "Confirm Order"
                        }
                        button {
                            class: "btn btn-outline-orange",
                            width: "100%",
                            Icon { width: 16, height: 16, icon: GoCalendar }
                            "Reschedule Meal"
                        }
                        button { class: "btn btn-outline", width: "100%", "Swap Meal" }
                    }
                }
            }
        }
    }
}

#[component]
fn SelectedMealDetails(meal: Meal) -> Element {
    let chef = chef_by_id(&meal.chef_id);

    rsx! {
        div {
            class: "card",
            padding: "24px",
            h2 { margin_top: "0", "Selected Meal Details" }

            div {
                class: "grid grid-2",
                margin_bottom: "24px",
                img { class: "detail-image", src: "{meal.image}", alt: "{meal.name}" }
                div {
                    div {
                        class: "row space-between",
                        align_items: "flex-start",
                        margin_bottom: "12px",
                        div {
                            h3 { margin: "0", margin_bottom: "8px", "{meal.name}" }
                            div {
                                class: "row gap-4 small",
                                Icon { width: 14, height: 14, icon: GoStarFill }
                                span { "{meal.rating}" }
                            }
                        }
                        div { class: "price price-lg", {format_rupees(meal.price)} }
                    }
                    p { class: "muted", "{meal.description}" }

                    if let Some(chef) = chef {
                        div {
                            class: "row gap-12 chip-panel",
                            img { class: "avatar-sm", src: "{chef.photo}", alt: "{chef.name}" }
                            div {
                                div { class: "small", "Chef {chef.name}" }
                                div { class: "small muted", {chef.cuisine.join(", ")} }
                            }
                        }
                    }

                    div {
                        margin_bottom: "16px",
                        div { class: "small muted", margin_bottom: "8px", "Ingredients" }
                        div {
                            class: "row wrap gap-8",
                            for ingredient in meal.ingredients.iter() {
                                span { key: "{ingredient}", class: "badge badge-secondary", "{ingredient}" }
                            }
                        }
                    }

                    div {
                        div { class: "small muted", margin_bottom: "8px", "Tags" }
                        div {
                            class: "row wrap gap-8",
                            for tag in meal.tags.iter() {
                                span { key: "{tag}", class: "badge badge-green-soft", "{tag}" }
                            }
                        }
                    }
                }
            }

            NutritionMeter { nutrition: meal.nutrition }
        }
    }
}
