use client::{clock::sleep, config::TIMINGS, tracking::EtaCountdown};
use dioxus::{logger::tracing::debug, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoClock, GoComment, GoDeviceMobile, GoLocation},
};
use shared::{
    catalog::{ORDERS, chef_by_id, meal_by_id},
    dashboard::TRACKING_PROGRESS,
    pricing::format_rupees,
};

use crate::components::OrderTimeline;

#[component]
pub fn OrderTracking() -> Element {
    let mut eta = use_signal(EtaCountdown::default);

    // Dropped together with the screen, which stops the countdown.
    use_future(move || async move {
        while !eta.peek().is_due() {
            sleep(TIMINGS.eta_tick).await;
            let minutes = eta.write().tick();
            debug!("ETA now {minutes} minutes");
        }
    });

    let Some(order) = ORDERS.first() else {
        return rsx! {
            div {
                class: "page empty-state",
                h3 { "No active orders" }
            }
        };
    };
    let meal = meal_by_id(&order.meal_id);
    let chef = chef_by_id(&order.chef_id);
    let minutes = eta.read().minutes();

    rsx! {
        div {
            class: "page",

            div {
                margin_bottom: "32px",
                h1 { margin_bottom: "8px", "Track Your Order" }
                p { class: "muted", "Order #{order.id}" }
            }

            div {
                class: "card card-hero",
                margin_bottom: "32px",
                div {
                    class: "row space-between",
                    margin_bottom: "16px",
                    div {
                        div { class: "faint-light", "Estimated Arrival" }
                        div { class: "stat stat-lg", "{minutes} mins" }
                    }
                    div { class: "icon-circle icon-circle-light", Icon { width: 32, height: 32, icon: GoClock } }
                }
                div {
                    class: "progress progress-light",
                    div { class: "progress-bar", width: "{TRACKING_PROGRESS}%" }
                }
                div { class: "faint-light", margin_top: "8px", "Your meal is being prepared with care" }
            }

            div {
                class: "grid grid-main-side",

                div {
                    class: "stack",
                    OrderTimeline { status: order.status }

                    div {
                        class: "card",
                        padding: "24px",
                        h3 { margin_top: "0", "Delivery Route" }
                        div {
                            class: "map-placeholder",
                            Icon { width: 48, height: 48, icon: GoLocation }
                            div { class: "muted", "Live tracking map" }
                            div { class: "small faint", "Map integration would go here" }
                        }
                        div {
                            class: "row gap-12 chip-panel",
                            align_items: "flex-start",
                            margin_top: "16px",
                            Icon { width: 20, height: 20, icon: GoLocation }
                            div {
                                div { class: "small", "Delivery Address" }
                                div { class: "small muted", "{order.delivery_address}" }
                            }
                        }
                    }

                    if let Some(instructions) = &order.special_instructions {
                        div {
                            class: "card",
                            padding: "24px",
                            h3 { margin_top: "0", "Special Instructions" }
                            div { class: "chip-panel", p { class: "muted", margin: "0", "{instructions}" } }
                        }
                    }
                }

                div {
                    class: "stack",

                    div {
                        class: "card",
                        padding: "24px",
                        h3 { margin_top: "0", "Your Order" }
                        if let Some(meal) = meal {
                            img { class: "detail-image", src: "{meal.image}", alt: "{meal.name}" }
                            h4 { "{meal.name}" }
                            p { class: "small muted", "{meal.description}" }
                            div {
                                class: "row wrap gap-8",
                                for tag in meal.tags.iter() {
                                    span { key: "{tag}", class: "badge badge-secondary", "{tag}" }
                                }
                            }
                            div {
                                class: "summary",
                                div {
                                    class: "row space-between",
                                    span { class: "muted", "Meal Price" }
                                    span { {format_rupees(meal.price)} }
                                }
                                div {
                                    class: "row space-between",
                                    span { class: "muted", "Delivery" }
                                    span { class: "accent-green", "Free" }
                                }
                                div {
                                    class: "row space-between summary-total",
                                    span { "Total" }
                                    span { {format_rupees(order.total_amount)} }
                                }
                            }
                        }
                    }

                    if let Some(chef) = chef {
                        div {
                            class: "card",
                            padding: "24px",
                            h3 { margin_top: "0", "Your Chef" }
                            div {
                                class: "row gap-12",
                                margin_bottom: "16px",
                                img { class: "avatar-md", src: "{chef.photo}", alt: "{chef.name}" }
                                div {
                                    h4 { margin: "0", "{chef.name}" }
                                    div {
                                        class: "small",
                                        "⭐ {chef.rating} "
                                        span { class: "muted", "({chef.total_orders} orders)" }
                                    }
                                }
                            }
                            div {
                                class: "stack",
                                button {
                                    class: "btn btn-outline",
                                    width: "100%",
                                    Icon { width: 16, height: 16, icon: GoDeviceMobile }
                                    "Call Chef"
                                }
                                button {
                                    class: "btn btn-outline",
                                    width: "100%",
                                    Icon { width: 16, height: 16, icon: GoComment }
                                    "Message Chef"
                                }
                            }
                        }
                    }

                    div {
                        class: "card card-muted",
                        padding: "24px",
                        h3 { margin_top: "0", "Need Help?" }
                        p { class: "small muted", "Having issues with your order? Our support team is here to help." }
                        button { class: "btn btn-outline", width: "100%", "Contact Support" }
                    }
                }
            }
        }
    }
}
