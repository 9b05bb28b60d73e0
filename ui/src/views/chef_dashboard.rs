use client::{clock::unix_millis, session::use_session};
use dioxus::{logger::tracing::info, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoCheckCircle, GoGraph, GoPackage, GoPlus, GoTrash},
};
use shared::{
    catalog::{DEMO_CHEF_ID, ORDERS, meal_by_id},
    dashboard::{CHEF_STATS, RECENT_ACTIVITY},
    menu::{MealDraft, initial_menu, remove_meal},
    orders::format_schedule,
    pricing::{format_rupees, format_rupees_grouped},
    types::{Meal, MealType},
};

#[component]
pub fn ChefDashboard() -> Element {
    let session = use_session();
    let name = session.user().map(|user| user.name).unwrap_or_default();
    let menu: Signal<Vec<Meal>> = use_signal(initial_menu);
    let mut adding_meal = use_signal(|| false);

    rsx! {
        div {
            class: "page",

            div {
                margin_bottom: "32px",
                h1 { margin_bottom: "8px", "Welcome back, Chef {name} 👨‍🍳" }
                p { class: "muted", "Here's what's happening with your kitchen today" }
            }

            div {
                class: "grid grid-4",
                margin_bottom: "32px",
                StatCard {
                    title: "Today's Orders",
                    value: CHEF_STATS.today_orders.to_string(),
                    note: "+3 from yesterday",
                    positive: true,
                    Icon { width: 20, height: 20, icon: GoPackage }
                }
                StatCard {
                    title: "Weekly Revenue",
                    value: format_rupees_grouped(CHEF_STATS.weekly_revenue),
                    note: "+12% this week",
                    positive: true,
                    span { "₹" }
                }
                StatCard {
                    title: "Total Orders",
                    value: CHEF_STATS.total_orders.to_string(),
                    note: "All time",
                    Icon { width: 20, height: 20, icon: GoGraph }
                }
                StatCard {
                    title: "Average Rating",
                    value: CHEF_STATS.avg_rating.to_string(),
                    note: "From 230 reviews",
                    span { "⭐" }
                }
            }

            ActiveOrders {}

            div {
                class: "card",
                padding: "24px",

                div {
                    class: "row space-between",
                    margin_bottom: "24px",
                    h2 { margin: "0", "Your Menu" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| adding_meal.set(!adding_meal()),
                        Icon { width: 16, height: 16, icon: GoPlus }
                        "Add Dish"
                    }
                }

                if adding_meal() {
                    AddDishForm { menu, open: adding_meal }
                }

                div {
                    class: "grid grid-2",
                    for meal in menu.read().iter().cloned() {
                        MenuItemCard { key: "{meal.id}", meal, menu }
                    }
                }
                if menu.read().is_empty() {
                    p { class: "muted text-center", "Your menu is empty. Add a dish to get started." }
                }
            }

            div {
                margin_top: "32px",
                h2 { margin_bottom: "24px", "Recent Activity" }
                div {
                    class: "card",
                    padding: "24px",
                    for (index, activity) in RECENT_ACTIVITY.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "row space-between activity-row",
                            div {
                                class: "row gap-12",
                                div {
                                    class: "icon-circle",
                                    Icon { width: 20, height: 20, icon: GoCheckCircle }
                                }
                                div {
                                    div { "{activity.action}" }
                                    div { class: "small muted", "{activity.customer}" }
                                }
                            }
                            div {
                                class: "text-right",
                                if let Some(amount) = activity.amount {
                                    div { {format_rupees(amount)} }
                                }
                                div { class: "small muted", "{activity.time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: String,
    note: &'static str,
    #[props(default)] positive: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "card",
            padding: "24px",
            div {
                class: "row space-between small muted",
                margin_bottom: "8px",
                span { "{title}" }
                {children}
            }
            div { class: "stat stat-lg", "{value}" }
            div {
                class: if positive { "small accent-green" } else { "small muted" },
                "{note}"
            }
        }
    }
}

#[component]
fn ActiveOrders() -> Element {
    let order_count = ORDERS.len();

    rsx! {
        div {
            class: "card",
            padding: "24px",
            margin_bottom: "32px",

            div {
                class: "row space-between",
                margin_bottom: "24px",
                h2 { margin: "0", "Active Orders" }
                span { class: "badge badge-secondary", "{order_count} orders" }
            }

            for order in ORDERS.iter() {
                div {
                    key: "{order.id}",
                    class: "row gap-16 order-row",
                    if let Some(meal) = meal_by_id(&order.meal_id) {
                        img { class: "thumb", src: "{meal.image}", alt: "{meal.name}" }
                        div {
                            flex: "1",
                            h3 { margin: "0", margin_bottom: "4px", "{meal.name}" }
                            p { class: "small muted", margin: "0", "Order #{order.id}" }
                            p { class: "small muted", margin: "0", {format_schedule(order.scheduled_for)} }
                        }
                    }
                    span { class: format!("badge {}", order.status.badge_class()), {order.status.label()} }
                    div {
                        class: "text-right",
                        div { margin_bottom: "4px", {format_rupees(order.total_amount)} }
                        div {
                            class: "row gap-8",
                            button { class: "btn btn-outline btn-sm", "View" }
                            button { class: "btn btn-primary btn-sm", "Update" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItemCard(meal: Meal, menu: Signal<Vec<Meal>>) -> Element {
    let mut menu = menu;
    let id = meal.id.clone();
    let meal_type = meal.meal_type.label();

    rsx! {
        div {
            class: "card row gap-16",
            align_items: "flex-start",
            padding: "16px",
            img { class: "thumb-lg", src: "{meal.image}", alt: "{meal.name}" }
            div {
                flex: "1",
                div {
                    class: "row space-between",
                    align_items: "flex-start",
                    margin_bottom: "8px",
                    div {
                        h3 { margin: "0", margin_bottom: "4px", "{meal.name}" }
                        span { class: "badge badge-outline", "{meal_type}" }
                    }
                    button {
                        class: "btn btn-ghost btn-sm danger",
                        title: "Remove dish",
                        onclick: move |_| {
                            if remove_meal(&mut menu.write(), &id) {
                                info!("Removed dish '{id}' from menu");
                            }
                        },
                        Icon { width: 16, height: 16, icon: GoTrash }
                    }
                }
                p { class: "small muted clamp-2", "{meal.description}" }
                div {
                    class: "row space-between small",
                    span { class: "price", {format_rupees(meal.price)} }
                    span { class: "muted", "⭐ {meal.rating} • {meal.nutrition.calories} cal" }
                }
            }
        }
    }
}

#[component]
fn AddDishForm(menu: Signal<Vec<Meal>>, open: Signal<bool>) -> Element {
    let (mut menu, mut open) = (menu, open);
    let mut draft = use_signal(MealDraft::default);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let id = format!("menu-{}", unix_millis());
        match draft().into_meal(id, DEMO_CHEF_ID) {
            Ok(meal) => {
                info!("Added dish '{}' to menu", meal.name);
                menu.write().push(meal);
                draft.set(MealDraft::default());
                error.set(None);
                open.set(false);
            }
            Err(message) => {
                info!("Invalid dish: {message}");
                error.set(Some(message));
            }
        }
    };

    rsx! {
        form {
            class: "card stack dialog",
            padding: "24px",
            margin_bottom: "24px",
            onsubmit: submit,

            h3 { margin_top: "0", "Add New Dish" }

            if let Some(message) = error() {
                div { class: "error-container", p { "{message}" } }
            }

            div {
                class: "grid grid-2",
                div {
                    label { class: "label", r#for: "dish-name", "Dish Name" }
                    input {
                        id: "dish-name",
                        placeholder: "e.g., Quinoa Power Bowl",
                        value: draft.read().name.clone(),
                        oninput: move |event| draft.write().name = event.value(),
                    }
                }
                div {
                    label { class: "label", r#for: "dish-price", "Price (₹)" }
                    input {
                        id: "dish-price",
                        r#type: "number",
                        placeholder: "180",
                        value: draft.read().price.clone(),
                        oninput: move |event| draft.write().price = event.value(),
                    }
                }
            }

            div {
                label { class: "label", r#for: "dish-description", "Description" }
                textarea {
                    id: "dish-description",
                    placeholder: "Describe your dish...",
                    value: draft.read().description.clone(),
                    oninput: move |event| draft.write().description = event.value(),
                }
            }

            div {
                label { class: "label", r#for: "dish-ingredients", "Ingredients (comma separated)" }
                input {
                    id: "dish-ingredients",
                    placeholder: "Quinoa, Chickpeas, Broccoli...",
                    value: draft.read().ingredients.clone(),
                    oninput: move |event| draft.write().ingredients = event.value(),
                }
            }

            div {
                class: "grid grid-2",
                div {
                    label { class: "label", r#for: "dish-type", "Meal Type" }
                    select {
                        id: "dish-type",
                        value: draft.read().meal_type.value(),
                        onchange: move |event| {
                            if let Some(meal_type) = MealType::from_value(&event.value()) {
                                draft.write().meal_type = meal_type;
                            }
                        },
                        for meal_type in MealType::ALL {
                            option { value: meal_type.value(), {meal_type.label()} }
                        }
                    }
                }
                div {
                    label { class: "label", r#for: "dish-image", "Image URL" }
                    input {
                        id: "dish-image",
                        placeholder: "https://...",
                        value: draft.read().image.clone(),
                        oninput: move |event| draft.write().image = event.value(),
                    }
                }
            }

            div {
                class: "grid grid-4",
                NumberField { label: "Calories", placeholder: "420", value: draft.read().calories.clone(), on_input: move |value| draft.write().calories = value }
                NumberField { label: "Protein (g)", placeholder: "18", value: draft.read().protein.clone(), on_input: move |value| draft.write().protein = value }
                NumberField { label: "Carbs (g)", placeholder: "52", value: draft.read().carbs.clone(), on_input: move |value| draft.write().carbs = value }
                NumberField { label: "Fats (g)", placeholder: "14", value: draft.read().fats.clone(), on_input: move |value| draft.write().fats = value }
            }

            div {
                class: "row gap-12",
                button { r#type: "submit", class: "btn btn-primary", "Add Dish" }
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: move |_| open.set(false),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn NumberField(
    label: &'static str,
    placeholder: &'static str,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: "label", "{label}" }
            input {
                r#type: "number",
                placeholder,
                value,
                oninput: move |event| on_input.call(event.value()),
            }
        }
    }
}
