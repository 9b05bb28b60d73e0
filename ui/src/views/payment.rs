use client::{
    payment::{PaymentProcessor, PaymentState},
    router::Screen,
    session::use_session,
};
use dioxus::{logger::tracing::info, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoArrowLeft, GoCheckCircle, GoCreditCard, GoDeviceMobile, GoPackage},
};
use shared::{
    catalog::featured_meal,
    pricing::{format_rupees, order_total},
};

const DELIVERY_FEE: u32 = 0;
const DISCOUNT: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Upi,
    Wallet,
    Card,
}

#[component]
fn MethodOption(
    method: Method,
    selected: Signal<Method>,
    title: &'static str,
    subtitle: &'static str,
    accent: &'static str,
    icon: Element,
    children: Element,
) -> Element {
    let mut selected = selected;
    let class = if selected() == method {
        "card selectable selected"
    } else {
        "card selectable"
    };

    rsx! {
        div {
            class,
            padding: "16px",
            onclick: move |_| selected.set(method),
            div {
                class: "row gap-12",
                input {
                    r#type: "radio",
                    name: "payment-method",
                    checked: selected() == method,
                }
                div { class: "icon-tile {accent}", {icon} }
                div {
                    div { "{title}" }
                    div { class: "small muted", "{subtitle}" }
                }
            }
            if selected() == method {
                {children}
            }
        }
    }
}

#[component]
pub fn Payment(on_navigate: EventHandler<Screen>) -> Element {
    let session = use_session();
    let mut state = use_signal(PaymentState::default);
    let method = use_signal(|| Method::Upi);
    let mut upi_id = use_signal(String::new);
    let mut card_number = use_signal(String::new);

    let meal = featured_meal();
    let total = order_total(meal.price, DELIVERY_FEE, DISCOUNT);
    let credits = session.user().map(|user| user.credits_or_zero()).unwrap_or(0);

    let pay = move |_| {
        if state() != PaymentState::Idle {
            return;
        }
        info!("Paying {} by {:?}", format_rupees(total), method());
        spawn(async move {
            let next = PaymentProcessor::default().run(&mut state).await;
            on_navigate.call(next);
        });
    };

    if state() == PaymentState::Succeeded {
        return rsx! {
            div {
                class: "page page-centered",
                div {
                    class: "card text-center",
                    max_width: "420px",
                    padding: "32px",
                    div { class: "icon-circle icon-circle-success", Icon { width: 48, height: 48, icon: GoCheckCircle } }
                    h2 { margin_bottom: "8px", "Payment Successful!" }
                    p { class: "muted", "Your order has been confirmed. The chef will start preparing your meal soon." }
                    div { class: "small faint", margin_bottom: "24px", "Redirecting to order tracking..." }
                    button {
                        class: "btn btn-primary",
                        width: "100%",
                        onclick: move |_| on_navigate.call(Screen::OrderTracking),
                        "Track Your Order"
                    }
                }
            }
        };
    }

    let processing = state() == PaymentState::Processing;
    let pay_label = if processing {
        "Processing...".to_owned()
    } else {
        format!("Pay {}", format_rupees(total))
    };

    rsx! {
        div {
            class: "page",

            div {
                margin_bottom: "32px",
                button {
                    class: "btn btn-ghost",
                    margin_bottom: "16px",
                    onclick: move |_| on_navigate.call(Screen::MealCustomization),
                    Icon { width: 16, height: 16, icon: GoArrowLeft }
                    "Back to Meal Selection"
                }
                h1 { margin_bottom: "8px", "Complete Your Payment" }
                p { class: "muted", "Secure and fast payment processing" }
            }

            div {
                class: "grid grid-main-side",

                div {
                    class: "card",
                    padding: "24px",
                    h2 { margin_top: "0", "Select Payment Method" }

                    div {
                        class: "stack",

                        MethodOption {
                            method: Method::Upi,
                            selected: method,
                            title: "UPI",
                            subtitle: "Google Pay, PhonePe, Paytm",
                            accent: "accent-purple",
                            icon: rsx! { Icon { width: 20, height: 20, icon: GoDeviceMobile } },
                            div {
                                class: "field",
                                margin_top: "16px",
                                label { r#for: "upi-id", "UPI ID" }
                                input {
                                    id: "upi-id",
                                    placeholder: "yourname@upi",
                                    value: "{upi_id}",
                                    oninput: move |event| upi_id.set(event.value()),
                                }
                                div {
                                    class: "grid grid-3",
                                    margin_top: "12px",
                                    button { class: "btn btn-outline btn-sm", "GPay" }
                                    button { class: "btn btn-outline btn-sm", "PhonePe" }
                                    button { class: "btn btn-outline btn-sm", "Paytm" }
                                }
                            }
                        }

                        MethodOption {
                            method: Method::Wallet,
                            selected: method,
                            title: "Digital Wallets",
                            subtitle: "Paytm, Amazon Pay, MobiKwik",
                            accent: "accent-orange",
                            icon: rsx! { Icon { width: 20, height: 20, icon: GoPackage } },
                            p { class: "small muted", margin_top: "12px", "You will be redirected to your wallet to approve the payment." }
                        }

                        MethodOption {
                            method: Method::Card,
                            selected: method,
                            title: "Credit / Debit Card",
                            subtitle: "Visa, Mastercard, RuPay",
                            accent: "accent-blue",
                            icon: rsx! { Icon { width: 20, height: 20, icon: GoCreditCard } },
                            div {
                                class: "stack",
                                margin_top: "16px",
                                div {
                                    class: "field",
                                    label { r#for: "card-number", "Card Number" }
                                    input {
                                        id: "card-number",
                                        placeholder: "1234 5678 9012 3456",
                                        value: "{card_number}",
                                        oninput: move |event| card_number.set(event.value()),
                                    }
                                }
                                div {
                                    class: "grid grid-2",
                                    div {
                                        class: "field",
                                        label { r#for: "expiry", "Expiry" }
                                        input { id: "expiry", placeholder: "MM/YY" }
                                    }
                                    div {
                                        class: "field",
                                        label { r#for: "cvv", "CVV" }
                                        input { id: "cvv", r#type: "password", placeholder: "123" }
                                    }
                                }
                            }
                        }

                        div {
                            class: "card disabled",
                            padding: "16px",
                            div {
                                class: "row gap-12",
                                div { class: "icon-tile accent-green", Icon { width: 20, height: 20, icon: GoPackage } }
                                div {
                                    div { "Meal Credits" }
                                    div { class: "small muted", "{credits} credits available" }
                                }
                            }
                        }
                    }

                    div {
                        class: "notice notice-success row gap-8",
                        margin_top: "24px",
                        Icon { width: 20, height: 20, icon: GoCheckCircle }
                        div { class: "small", "Your payment information is encrypted and secure. We never store your card details." }
                    }
                }

                div {
                    class: "card sticky",
                    padding: "24px",
                    h3 { margin_top: "0", "Order Summary" }
                    div {
                        class: "row gap-12",
                        margin_bottom: "24px",
                        img { class: "thumb", src: "{meal.image}", alt: "{meal.name}" }
                        div {
                            h4 { margin: "0", "{meal.name}" }
                            p { class: "small muted", "{meal.nutrition.calories} cal" }
                        }
                    }
                    div {
                        class: "summary",
                        div {
                            class: "row space-between small",
                            span { class: "muted", "Meal Price" }
                            span { {format_rupees(meal.price)} }
                        }
                        div {
                            class: "row space-between small",
                            span { class: "muted", "Delivery Fee" }
                            span { class: "accent-green", "Free" }
                        }
                        if DISCOUNT > 0 {
                            div {
                                class: "row space-between small",
                                span { class: "muted", "Discount" }
                                span { class: "accent-green", "-" {format_rupees(DISCOUNT)} }
                            }
                        }
                    }
                    div {
                        class: "row space-between summary-total",
                        margin_bottom: "24px",
                        span { "Total Amount" }
                        span { {format_rupees(total)} }
                    }
                    button {
                        class: "btn btn-primary",
                        width: "100%",
                        disabled: processing,
                        onclick: pay,
                        "{pay_label}"
                    }
                    p { class: "small faint text-center", margin_top: "16px", "By completing this payment, you agree to our Terms of Service" }
                }
            }
        }
    }
}
