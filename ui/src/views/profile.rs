#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use client::{router::Screen, session::use_session};
use dioxus::{
    logger::tracing::{debug, info},
    prelude::*,
};
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoBell, GoCreditCard, GoDeviceMobile, GoLocation, GoLock, GoMail, GoPerson, GoSignOut, GoVerified},
};
use shared::{catalog::DIETARY_OPTIONS, limits::LIMITS};

use super::auth::{check_email, check_name, check_phone};

const PLACEHOLDER_PHOTO: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200";
const CHEF_CUISINE: &str = "North Indian, Healthy Bowls";
const CHEF_BIO: &str = "Passionate about creating nutritious, home-cooked meals with fresh ingredients.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Personal,
    Addresses,
    Preferences,
    Settings,
}

impl Tab {
    const ALL: [Self; 4] = [Self::Personal, Self::Addresses, Self::Preferences, Self::Settings];

    fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Addresses => "Addresses",
            Self::Preferences => "Preferences",
            Self::Settings => "Settings",
        }
    }
}

fn check_profile(name: &str, email: &str, phone: &str) -> Option<String> {
    check_name(name)
        .or_else(|| check_email(email))
        .or_else(|| check_phone(phone))
}

/// First address is home, every other one is work.
fn address_label(index: usize) -> &'static str {
    if index == 0 { "Home" } else { "Work" }
}

#[component]
pub fn Profile(on_navigate: EventHandler<Screen>) -> Element {
    let session = use_session();
    let mut tab = use_signal(|| Tab::Personal);

    let Some(user) = session.user() else {
        return rsx! {};
    };
    let is_chef = user.is_chef();
    let photo = user.photo.clone().unwrap_or_else(|| PLACEHOLDER_PHOTO.to_owned());
    let credits = user.credits_or_zero();

    let content = match tab() {
        Tab::Personal => rsx! { PersonalInfo {} },
        Tab::Addresses => rsx! { Addresses {} },
        Tab::Preferences => rsx! { Preferences {} },
        Tab::Settings => rsx! { Settings { on_navigate } },
    };

    rsx! {
        div {
            class: "page",

            div {
                margin_bottom: "32px",
                h1 { margin_bottom: "8px", "Profile & Settings" }
                p { class: "muted", "Manage your account and preferences" }
            }

            div {
                class: "card row gap-24",
                padding: "24px",
                margin_bottom: "32px",
                img { class: "avatar-lg", src: "{photo}", alt: "{user.name}" }
                div {
                    flex: "1",
                    h2 { margin: "0 0 4px", "{user.name}" }
                    p { class: "muted", "{user.email}" }
                    div {
                        class: "row gap-8",
                        if is_chef {
                            span { class: "badge badge-orange", "Chef" }
                        } else {
                            span { class: "badge badge-green", "Customer" }
                            if user.subscription_plan_id.is_some() {
                                span { class: "badge badge-secondary", "Premium Member" }
                            }
                        }
                    }
                }
                if !is_chef {
                    div {
                        class: "text-right",
                        div { class: "stat accent-green", "{credits}" }
                        div { class: "small muted", "Meal Credits" }
                        button {
                            class: "btn btn-primary btn-sm",
                            margin_top: "8px",
                            onclick: move |_| on_navigate.call(Screen::Subscription),
                            "Add Credits"
                        }
                    }
                }
            }

            div {
                class: "tabs",
                for item in Tab::ALL {
                    button {
                        key: "{item:?}",
                        class: if tab() == item { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(item),
                        {item.label()}
                    }
                }
            }

            {content}
        }
    }
}

#[component]
fn PersonalInfo() -> Element {
    let mut session = use_session();
    let user = session.user().unwrap_or_default();
    let is_chef = user.is_chef();

    let mut editing = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut name = use_signal(|| user.name.clone());
    let mut email = use_signal(|| user.email.clone());
    let mut phone = use_signal(|| user.phone.clone());

    let mut reset = move || {
        if let Some(user) = session.user() {
            name.set(user.name);
            email.set(user.email);
            phone.set(user.phone);
        }
        error.set(None);
        editing.set(false);
    };

    let save = move |_| {
        if let Some(message) = check_profile(&name.read(), &email.read(), &phone.read()) {
            info!("Invalid user input: {message}");
            error.set(Some(message));
            return;
        }
        session.update_profile(&name.read(), &email.read(), &phone.read());
        error.set(None);
        editing.set(false);
    };

    rsx! {
        div {
            class: "card",
            padding: "24px",

            div {
                class: "row space-between",
                margin_bottom: "24px",
                h3 { margin: "0", "Personal Information" }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| if editing() { reset() } else { editing.set(true) },
                    if editing() { "Cancel" } else { "Edit" }
                }
            }

            if let Some(message) = error() {
                div {
                    class: "error-container",
                    p { "{message}" }
                }
            }

            div {
                class: "grid grid-2",

                div {
                    class: "field",
                    label { r#for: "name", "Full Name" }
                    div {
                        class: "input-icon",
                        Icon { width: 18, height: 18, icon: GoPerson }
                        input {
                            id: "name",
                            disabled: !editing(),
                            maxlength: LIMITS.max_name_length as i64,
                            value: name(),
                            oninput: move |event| name.set(event.value()),
                        }
                    }
                }

                div {
                    class: "field",
                    label { r#for: "email", "Email Address" }
                    div {
                        class: "input-icon",
                        Icon { width: 18, height: 18, icon: GoMail }
                        input {
                            id: "email",
                            r#type: "email",
                            disabled: !editing(),
                            maxlength: LIMITS.max_email_length as i64,
                            value: email(),
                            oninput: move |event| email.set(event.value()),
                        }
                    }
                }

                div {
                    class: "field",
                    label { r#for: "phone", "Phone Number" }
                    div {
                        class: "input-icon",
                        Icon { width: 18, height: 18, icon: GoDeviceMobile }
                        input {
                            id: "phone",
                            r#type: "tel",
                            disabled: !editing(),
                            maxlength: LIMITS.max_phone_length as i64,
                            value: phone(),
                            oninput: move |event| phone.set(event.value()),
                        }
                    }
                }

                if is_chef {
                    div {
                        class: "field",
                        label { r#for: "cuisine", "Cuisine Specialty" }
                        input { id: "cuisine", disabled: !editing(), value: CHEF_CUISINE }
                    }
                }
            }

            if is_chef {
                div {
                    class: "field",
                    margin_top: "24px",
                    label { r#for: "bio", "Bio" }
                    textarea { id: "bio", disabled: !editing(), value: CHEF_BIO }
                }
            }

            if editing() {
                div {
                    class: "row gap-12",
                    margin_top: "24px",
                    button { class: "btn btn-primary", onclick: save, "Save Changes" }
                    button { class: "btn btn-outline", onclick: move |_| reset(), "Cancel" }
                }
            }
        }
    }
}

#[component]
fn Addresses() -> Element {
    let session = use_session();
    let addresses = session.user().map(|user| user.addresses).unwrap_or_default();

    rsx! {
        div {
            class: "card",
            padding: "24px",

            div {
                class: "row space-between",
                margin_bottom: "24px",
                h3 { margin: "0", "Saved Addresses" }
                button { class: "btn btn-primary", "Add New Address" }
            }

            if addresses.is_empty() {
                div {
                    class: "empty-state",
                    Icon { width: 32, height: 32, icon: GoLocation }
                    p { class: "muted", "No saved addresses yet" }
                }
            }

            div {
                class: "stack",
                for (index, address) in addresses.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "row space-between bordered",
                        align_items: "flex-start",
                        div {
                            class: "row gap-12",
                            div { class: "icon-tile accent-green", Icon { width: 20, height: 20, icon: GoLocation } }
                            div {
                                div { {address_label(index)} }
                                div { class: "small muted", "{address}" }
                            }
                        }
                        div {
                            class: "row gap-8",
                            button { class: "btn btn-ghost btn-sm", "Edit" }
                            button { class: "btn btn-ghost btn-sm accent-red", "Delete" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Preferences() -> Element {
    let mut session = use_session();
    let mut order_updates = use_signal(|| true);
    let mut email_notifications = use_signal(|| true);
    let mut sms_notifications = use_signal(|| false);

    let Some(user) = session.user() else {
        return rsx! {};
    };
    let dietary = DIETARY_OPTIONS.map(|tag| (tag, user.dietary_preferences.iter().any(|selected| selected == tag)));

    rsx! {
        div {
            class: "stack",

            if !user.is_chef() {
                div {
                    class: "card",
                    padding: "24px",
                    h3 { margin_top: "0", "Dietary Preferences" }
                    div {
                        class: "row wrap gap-12",
                        for (tag, selected) in dietary {
                            span {
                                key: "{tag}",
                                class: if selected { "badge badge-toggle selected" } else { "badge badge-toggle" },
                                onclick: move |_| {
                                    let selected = session.toggle_dietary_preference(tag);
                                    debug!("Dietary preference {tag} selected: {selected}");
                                },
                                "{tag}"
                            }
                        }
                    }
                }
            }

            div {
                class: "card",
                padding: "24px",
                h3 { margin_top: "0", "Notification Preferences" }
                div {
                    class: "stack",
                    NotificationToggle {
                        title: "Order Updates",
                        description: "Get notified about your order status",
                        enabled: order_updates(),
                        on_toggle: move |_| order_updates.set(!order_updates()),
                        Icon { width: 20, height: 20, icon: GoBell }
                    }
                    NotificationToggle {
                        title: "Email Notifications",
                        description: "Receive emails about new chefs and offers",
                        enabled: email_notifications(),
                        on_toggle: move |_| email_notifications.set(!email_notifications()),
                        Icon { width: 20, height: 20, icon: GoMail }
                    }
                    NotificationToggle {
                        title: "SMS Notifications",
                        description: "Get text messages for delivery updates",
                        enabled: sms_notifications(),
                        on_toggle: move |_| sms_notifications.set(!sms_notifications()),
                        Icon { width: 20, height: 20, icon: GoDeviceMobile }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationToggle(
    title: &'static str,
    description: &'static str,
    enabled: bool,
    on_toggle: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "row space-between",
            div {
                class: "row gap-12",
                {children}
                div {
                    div { "{title}" }
                    div { class: "small muted", "{description}" }
                }
            }
            button {
                class: if enabled { "switch on" } else { "switch" },
                role: "switch",
                aria_checked: enabled,
                onclick: move |_| on_toggle.call(()),
            }
        }
    }
}

#[component]
fn Settings(on_navigate: EventHandler<Screen>) -> Element {
    let mut session = use_session();
    let is_chef = session.user().is_some_and(|user| user.is_chef());

    rsx! {
        div {
            class: "stack",

            div {
                class: "card",
                padding: "24px",
                h3 { margin_top: "0", "Account Settings" }
                div {
                    class: "stack",
                    button {
                        class: "menu-row",
                        Icon { width: 20, height: 20, icon: GoLock }
                        div {
                            div { "Change Password" }
                            div { class: "small muted", "Update your password" }
                        }
                    }
                    button {
                        class: "menu-row",
                        Icon { width: 20, height: 20, icon: GoCreditCard }
                        div {
                            div { "Payment Methods" }
                            div { class: "small muted", "Manage saved payment methods" }
                        }
                    }
                    if !is_chef {
                        button {
                            class: "menu-row",
                            onclick: move |_| on_navigate.call(Screen::Subscription),
                            Icon { width: 20, height: 20, icon: GoVerified }
                            div {
                                div { "Subscription Plan" }
                                div { class: "small muted", "View or change your plan" }
                            }
                        }
                    }
                    button {
                        class: "menu-row",
                        onclick: move |_| session.logout(),
                        Icon { width: 20, height: 20, icon: GoSignOut }
                        div {
                            div { "Logout" }
                            div { class: "small muted", "Sign out of this device" }
                        }
                    }
                }
            }

            div {
                class: "card card-danger",
                padding: "24px",
                h3 { class: "accent-red", margin_top: "0", "Danger Zone" }
                div {
                    class: "stack",
                    button { class: "btn btn-danger-outline", width: "100%", "Deactivate Account" }
                    button { class: "btn btn-danger-outline", width: "100%", "Delete Account" }
                }
            }
        }
    }
}
