use client::{router::Screen, session::use_session};
use dioxus::{logger::tracing::info, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoCheck, GoCreditCard, GoStar, GoZap},
};
use shared::{
    catalog::{PLANS, plan_by_id},
    pricing::{format_rupees, price_per_meal},
    types::SubscriptionPlan,
};

const FAQ: [(&str, &str); 4] = [
    (
        "Can I cancel anytime?",
        "Yes! You can cancel your subscription anytime. Your credits will remain valid for 30 days after cancellation.",
    ),
    (
        "What are meal credits?",
        "Meal credits are like tokens you can use to order any meal from our chef network. One credit = one meal, regardless of the meal type.",
    ),
    (
        "Can I skip or reschedule meals?",
        "Absolutely! You have complete flexibility to skip, reschedule, or customize your meals at any time through your dashboard.",
    ),
    (
        "Do unused credits roll over?",
        "Yes, unused credits roll over to the next billing cycle as long as your subscription is active.",
    ),
];

fn plan_icon(plan_id: &str) -> Element {
    match plan_id {
        "plan-2" => rsx! { Icon { width: 24, height: 24, icon: GoZap } },
        "plan-3" => rsx! { Icon { width: 24, height: 24, icon: GoStar } },
        _ => rsx! { Icon { width: 24, height: 24, icon: GoCreditCard } },
    }
}

#[component]
pub fn SubscriptionPlans(on_navigate: EventHandler<Screen>) -> Element {
    let session = use_session();
    let user = session.user();
    let current_plan_id = user.as_ref().and_then(|user| user.subscription_plan_id.clone());
    let current_plan = current_plan_id.as_deref().and_then(plan_by_id);
    let credits = user.as_ref().map_or(0, |user| user.credits_or_zero());

    rsx! {
        div {
            class: "page",

            div {
                class: "text-center",
                margin_bottom: "48px",
                h1 { "Choose Your Plan" }
                p { class: "lead", "Flexible subscription plans for your healthy lifestyle. Cancel or change anytime." }
            }

            if let Some(plan) = current_plan {
                div {
                    class: "card card-hero narrow row space-between",
                    margin_bottom: "48px",
                    div {
                        div { class: "faint-light", "Current Plan" }
                        h2 { margin: "0", margin_bottom: "8px", "{plan.name}" }
                        div { class: "faint-light", "{credits} meal credits remaining" }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_navigate.call(Screen::CustomerDashboard),
                        "View Dashboard"
                    }
                }
            }

            div {
                class: "grid grid-4",
                margin_bottom: "48px",
                for plan in PLANS.iter() {
                    PlanCard {
                        key: "{plan.id}",
                        plan: plan.clone(),
                        current: current_plan_id.as_deref() == Some(plan.id.as_str()),
                        on_navigate,
                    }
                }
            }

            div {
                class: "narrow",
                h2 { class: "text-center", margin_bottom: "32px", "Frequently Asked Questions" }
                for (question, answer) in FAQ {
                    div {
                        key: "{question}",
                        class: "card",
                        padding: "24px",
                        margin_bottom: "16px",
                        h3 { margin_top: "0", "{question}" }
                        p { class: "muted", margin: "0", "{answer}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: SubscriptionPlan, current: bool, on_navigate: EventHandler<Screen>) -> Element {
    let per_meal = price_per_meal(&plan);
    let plan_id = plan.id.clone();
    let card_class = match (plan.popular, current) {
        (_, true) => "card plan-card current",
        (true, false) => "card plan-card popular",
        (false, false) => "card plan-card",
    };
    let button_class = if plan.popular {
        "btn btn-orange"
    } else {
        "btn btn-primary"
    };

    rsx! {
        div {
            class: card_class,

            if current {
                div { class: "ribbon ribbon-green", "Current Plan" }
            } else if plan.popular {
                div { class: "ribbon ribbon-orange", "Most Popular" }
            }

            div {
                padding: "24px",
                div { class: "icon-tile icon-tile-solid", {plan_icon(&plan.id)} }
                h3 { margin_bottom: "8px", "{plan.name}" }
                div { class: "small muted", margin_bottom: "16px", "{plan.duration}" }

                div {
                    margin_bottom: "24px",
                    if let Some(per_meal) = per_meal {
                        div { class: "stat stat-xl", {format_rupees(plan.price)} }
                        div { class: "small muted", {format!("≈ {} per meal", format_rupees(per_meal))} }
                    } else {
                        div { class: "stat stat-xl", "Pay per meal" }
                        div { class: "small muted", "No commitment" }
                    }
                }

                ul {
                    class: "benefits",
                    for benefit in plan.benefits.iter() {
                        li {
                            key: "{benefit}",
                            Icon { width: 16, height: 16, icon: GoCheck }
                            span { class: "muted", "{benefit}" }
                        }
                    }
                }

                button {
                    class: button_class,
                    width: "100%",
                    disabled: current,
                    onclick: move |_| {
                        info!("Selected plan '{plan_id}'");
                        on_navigate.call(Screen::Payment);
                    },
                    if current { "Current Plan" } else { "Select Plan" }
                }
            }
        }
    }
}
