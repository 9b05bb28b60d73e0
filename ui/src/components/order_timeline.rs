use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoCheckCircle, GoFlame, GoPackage, GoRocket},
};
use shared::{
    orders::{StepState, TIMELINE},
    types::OrderStatus,
};

fn step_icon(status: OrderStatus) -> Element {
    match status {
        OrderStatus::Preparing => rsx! { Icon { width: 20, height: 20, icon: GoFlame } },
        OrderStatus::Ready => rsx! { Icon { width: 20, height: 20, icon: GoPackage } },
        OrderStatus::OutForDelivery => rsx! { Icon { width: 20, height: 20, icon: GoRocket } },
        OrderStatus::Delivered | OrderStatus::Cancelled => {
            rsx! { Icon { width: 20, height: 20, icon: GoCheckCircle } }
        }
    }
}

fn dot_class(state: StepState) -> &'static str {
    match state {
        StepState::Done => "timeline-dot active",
        StepState::Current => "timeline-dot active current",
        StepState::Pending => "timeline-dot",
    }
}

#[component]
pub fn OrderTimeline(status: OrderStatus) -> Element {
    let steps = TIMELINE
        .iter()
        .enumerate()
        .map(|(index, step)| (step, status.step_state(index)));

    rsx! {
        div {
            class: "card",
            padding: "24px",
            h3 { margin_top: "0", margin_bottom: "24px", "Order Status" }

            div {
                class: "timeline",
                for (step, state) in steps {
                    div {
                        key: "{step.label}",
                        class: "timeline-step",

                        div {
                            class: dot_class(state),
                            {step_icon(step.status)}
                        }
                        div {
                            class: "timeline-body",
                            div {
                                class: if state == StepState::Pending { "muted" } else { "" },
                                "{step.label}"
                            }
                            div { class: "small muted", "{step.description}" }
                            if state == StepState::Current {
                                div { class: "small accent-green", margin_top: "8px", "In Progress..." }
                            }
                        }
                    }
                }
            }
        }
    }
}
