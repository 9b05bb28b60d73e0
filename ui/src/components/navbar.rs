use client::{
    router::{Screen, dashboard_for, menu_for},
    session::use_session,
};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon, IconShape,
    icons::go_icons::{
        GoCalendar, GoCreditCard, GoHome, GoPeople, GoPerson, GoSignOut, GoThreeBars, GoTools,
        GoX,
    },
};
use shared::types::User;

fn menu_icon(screen: Screen, size: u32) -> Element {
    fn icon(shape: impl IconShape + Clone + PartialEq + 'static, size: u32) -> Element {
        rsx! { Icon { width: size, height: size, icon: shape } }
    }

    match screen {
        Screen::CustomerDashboard | Screen::ChefDashboard => icon(GoHome, size),
        Screen::MealCustomization => icon(GoTools, size),
        Screen::ChefNetwork => icon(GoPeople, size),
        Screen::OrderTracking => icon(GoCalendar, size),
        Screen::Subscription | Screen::Payment => icon(GoCreditCard, size),
        Screen::Profile | Screen::Landing | Screen::Auth => icon(GoPerson, size),
    }
}

#[component]
pub fn Navbar(user: User, current: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let mut session = use_session();
    let mut mobile_menu_open = use_signal(|| false);
    let items = menu_for(user.role);
    let home = dashboard_for(user.role);

    rsx! {
        nav {
            class: "navbar",

            div {
                class: "navbar-inner",

                button {
                    class: "brand",
                    onclick: move |_| on_navigate.call(home),
                    div { class: "brand-logo", "Z" }
                    span { class: "brand-name", "ZYNK" }
                }

                div {
                    class: "navbar-links",
                    for item in items {
                        button {
                            key: "{item.screen}",
                            class: if item.screen == current { "nav-item active" } else { "nav-item" },
                            onclick: move |_| on_navigate.call(item.screen),
                            {menu_icon(item.screen, 16)}
                            span { "{item.label}" }
                        }
                    }
                    button {
                        class: "nav-item logout",
                        onclick: move |_| session.logout(),
                        Icon { width: 16, height: 16, icon: GoSignOut }
                        span { "Logout" }
                    }
                }

                button {
                    class: "navbar-toggle",
                    onclick: move |_| mobile_menu_open.set(!mobile_menu_open()),
                    if mobile_menu_open() {
                        Icon { width: 24, height: 24, icon: GoX }
                    } else {
                        Icon { width: 24, height: 24, icon: GoThreeBars }
                    }
                }
            }

            if mobile_menu_open() {
                div {
                    class: "navbar-mobile",
                    for item in items {
                        button {
                            key: "{item.screen}",
                            class: if item.screen == current { "nav-item active" } else { "nav-item" },
                            width: "100%",
                            onclick: move |_| {
                                on_navigate.call(item.screen);
                                mobile_menu_open.set(false);
                            },
                            {menu_icon(item.screen, 20)}
                            span { "{item.label}" }
                        }
                    }
                    button {
                        class: "nav-item logout",
                        width: "100%",
                        margin_top: "8px",
                        onclick: move |_| {
                            session.logout();
                            mobile_menu_open.set(false);
                        },
                        Icon { width: 20, height: 20, icon: GoSignOut }
                        span { "Logout" }
                    }
                }
            }
        }
    }
}
