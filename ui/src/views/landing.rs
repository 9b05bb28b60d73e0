use client::router::Screen;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoArrowRight, GoCalendar, GoHeart, GoPeople, GoVerified},
};

const FEATURES: [(&str, &str); 4] = [
    (
        "Home Chefs",
        "Connect with talented home chefs who prepare fresh, healthy meals daily",
    ),
    (
        "Healthy & Homemade",
        "Nutritious meals made with love and fresh ingredients, just like home",
    ),
    (
        "Flexible Scheduling",
        "Customize, reschedule, or skip meals anytime to fit your lifestyle",
    ),
    (
        "Quality Guaranteed",
        "All chefs are verified and rated by our community",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Choose Your Plan",
        "Select a subscription plan that fits your needs or go pay-as-you-go",
    ),
    (
        "Pick Your Meals",
        "Browse home chefs and their healthy meal options with full nutrition info",
    ),
    (
        "Enjoy & Track",
        "Get fresh meals delivered, track in real-time, and manage your nutrition",
    ),
];

fn feature_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon { width: 24, height: 24, icon: GoPeople } },
        1 => rsx! { Icon { width: 24, height: 24, icon: GoHeart } },
        2 => rsx! { Icon { width: 24, height: 24, icon: GoCalendar } },
        _ => rsx! { Icon { width: 24, height: 24, icon: GoVerified } },
    }
}

#[component]
pub fn Landing(on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        div {
            class: "page page-landing",

            div {
                class: "hero",
                div { class: "brand-logo brand-logo-lg", "Z" }
                h1 { "ZYNK - Your Daily Healthy Food Subscription" }
                p {
                    class: "lead",
                    "Connect with home chefs and caterers for fresh, healthy, homemade meals delivered to your doorstep. "
                    "Perfect for students, professionals, and anyone seeking a healthier lifestyle."
                }
                div {
                    class: "row gap-16 center",
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: move |_| on_navigate.call(Screen::Auth),
                        "Get Started"
                        Icon { width: 18, height: 18, icon: GoArrowRight }
                    }
                    button {
                        class: "btn btn-outline btn-lg",
                        onclick: move |_| on_navigate.call(Screen::Auth),
                        "Login"
                    }
                }
            }

            div {
                class: "grid grid-4",
                margin_bottom: "64px",
                for (index, (title, description)) in FEATURES.into_iter().enumerate() {
                    div {
                        key: "{title}",
                        class: "card text-center",
                        padding: "24px",
                        div { class: "icon-tile", {feature_icon(index)} }
                        h3 { "{title}" }
                        p { class: "small muted", "{description}" }
                    }
                }
            }

            div {
                class: "card",
                padding: "48px",
                h2 { class: "text-center", margin_bottom: "48px", "How ZYNK Works" }
                div {
                    class: "grid grid-3",
                    for (number, (title, description)) in (1..).zip(STEPS) {
                        div {
                            key: "{title}",
                            class: "text-center",
                            div { class: "step-number", "{number}" }
                            h3 { "{title}" }
                            p { class: "muted", "{description}" }
                        }
                    }
                }
            }

            div {
                class: "text-center",
                margin_top: "64px",
                h2 { "Ready to Start Your Healthy Journey?" }
                p { class: "muted", margin_bottom: "32px", "Join thousands of users enjoying homemade, healthy meals every day" }
                button {
                    class: "btn btn-orange btn-lg",
                    onclick: move |_| on_navigate.call(Screen::Auth),
                    "Sign Up Now"
                }
            }
        }
    }
}
