#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use client::{router::Screen, session::use_session};
use dioxus::{logger::tracing::info, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::go_icons::{GoFlame, GoPeople},
};
use shared::{limits::LIMITS, types::Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

pub(super) fn check_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        Some("Email is a required field".to_owned())
    } else if email.len() > LIMITS.max_email_length {
        Some("Email is too long".to_owned())
    } else if !email.contains('@') {
        Some("Email must contain \"@\" symbol".to_owned())
    } else {
        None
    }
}

fn check_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is a required field".to_owned())
    } else if password.len() > LIMITS.max_password_length {
        Some("Password is too long".to_owned())
    } else {
        None
    }
}

pub(super) fn check_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        Some("Full name is a required field".to_owned())
    } else if name.len() > LIMITS.max_name_length {
        Some("Full name is too long".to_owned())
    } else {
        None
    }
}

pub(super) fn check_phone(phone: &str) -> Option<String> {
    if phone.trim().len() > LIMITS.max_phone_length {
        Some("Phone number is too long".to_owned())
    } else {
        None
    }
}

/// First problem with the form, checked in the order fields are shown.
fn check_form(mode: Mode, name: &str, email: &str, phone: &str, password: &str) -> Option<String> {
    match mode {
        Mode::Login => check_email(email).or_else(|| check_password(password)),
        Mode::Signup => check_name(name)
            .or_else(|| check_email(email))
            .or_else(|| check_phone(phone))
            .or_else(|| check_password(password)),
    }
}

#[component]
pub fn Auth(on_navigate: EventHandler<Screen>) -> Element {
    let session = use_session();
    let mut mode = use_signal(|| Mode::Login);
    let mut role = use_signal(Role::default);
    let mut loading = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        if loading() {
            return;
        }
        let mode = mode();
        if let Some(message) = check_form(mode, &name.read(), &email.read(), &phone.read(), &password.read()) {
            info!("Invalid user input: {message}");
            error.set(Some(message));
            return;
        }
        error.set(None);
        loading.set(true);
        spawn(async move {
            match mode {
                Mode::Login => {
                    session.login(email(), password(), role()).await;
                }
                Mode::Signup => {
                    session.signup(name(), email(), password(), role()).await;
                }
            }
            loading.set(false);
        });
    };

    let role_class = |value: Role| {
        if role() == value {
            format!("role-option selected role-{value}")
        } else {
            "role-option".to_owned()
        }
    };
    let submit_label = match (loading(), mode()) {
        (true, _) => "Processing...",
        (false, Mode::Login) => "Login",
        (false, Mode::Signup) => "Sign Up",
    };

    rsx! {
        div {
            class: "page page-auth",

            div {
                class: "card auth-card",

                div {
                    class: "text-center",
                    margin_bottom: "32px",
                    div { class: "brand-logo brand-logo-md", "Z" }
                    h1 { margin_bottom: "8px", "Welcome to ZYNK" }
                    p { class: "muted", "Your healthy food journey starts here" }
                }

                div {
                    class: "tabs",
                    button {
                        class: if mode() == Mode::Login { "tab active" } else { "tab" },
                        onclick: move |_| mode.set(Mode::Login),
                        "Login"
                    }
                    button {
                        class: if mode() == Mode::Signup { "tab active" } else { "tab" },
                        onclick: move |_| mode.set(Mode::Signup),
                        "Sign Up"
                    }
                }

                div {
                    margin_bottom: "24px",
                    label { class: "label", "I am a" }
                    div {
                        class: "grid grid-2",
                        button {
                            r#type: "button",
                            class: role_class(Role::Customer),
                            onclick: move |_| role.set(Role::Customer),
                            Icon { width: 32, height: 32, icon: GoPeople }
                            div { "Customer" }
                        }
                        button {
                            r#type: "button",
                            class: role_class(Role::Chef),
                            onclick: move |_| role.set(Role::Chef),
                            Icon { width: 32, height: 32, icon: GoFlame }
                            div { "Chef" }
                        }
                    }
                }

                if let Some(message) = error() {
                    div {
                        class: "error-container",
                        p { "{message}" }
                    }
                }

                form {
                    class: "stack",
                    onsubmit: submit,

                    if mode() == Mode::Signup {
                        label { class: "label", r#for: "name", "Full Name" }
                        input {
                            id: "name",
                            placeholder: "Enter your name",
                            maxlength: LIMITS.max_name_length as i64,
                            value: name(),
                            oninput: move |event| name.set(event.value()),
                        }
                    }

                    label { class: "label", r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Enter your email",
                        maxlength: LIMITS.max_email_length as i64,
                        value: email(),
                        oninput: move |event| email.set(event.value()),
                    }

                    if mode() == Mode::Signup {
                        label { class: "label", r#for: "phone", "Phone Number" }
                        input {
                            id: "phone",
                            r#type: "tel",
                            placeholder: "+91 98765 43210",
                            maxlength: LIMITS.max_phone_length as i64,
                            value: phone(),
                            oninput: move |event| phone.set(event.value()),
                        }
                    }

                    label { class: "label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        oninput: move |event| password.set(event.value()),
                    }

                    button {
                        r#type: "submit",
                        class: if role() == Role::Chef { "btn btn-orange" } else { "btn btn-primary" },
                        width: "100%",
                        disabled: loading(),
                        "{submit_label}"
                    }
                }

                p {
                    class: "text-center small",
                    margin_top: "24px",
                    a {
                        href: "#",
                        onclick: move |event| {
                            event.prevent_default();
                            on_navigate.call(Screen::Landing);
                        },
                        "Back to home"
                    }
                }
            }
        }
    }
}
