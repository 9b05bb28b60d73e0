use client::{
    router::{Router, Screen, resolve},
    session::{MockAuthenticator, use_session_provider},
};
use dioxus::prelude::*;

use crate::{
    components::Navbar,
    views::{
        Auth, ChefDashboard, ChefNetwork, CustomerDashboard, Landing, MealCustomization,
        OrderTracking, Payment, Profile, SubscriptionPlans,
    },
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SCROLL_TO_TOP: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

#[component]
pub fn App() -> Element {
    let session = use_session_provider(MockAuthenticator::default());
    let mut router = use_signal(Router::default);

    // Re-run the redirect rules whenever somebody signs in or out.
    use_effect(move || {
        let user = session.user();
        router.write().sync_auth(user.as_ref());
    });

    let on_navigate = use_callback(move |screen: Screen| {
        let user = session.user();
        let transition = router.write().navigate(screen, user.as_ref());
        if transition.reset_scroll {
            document::eval(SCROLL_TO_TOP);
        }
    });

    let user = session.user();
    let screen = resolve(router.read().current(), user.as_ref());
    let view = match screen {
        Screen::Landing => rsx! { Landing { on_navigate } },
        Screen::Auth => rsx! { Auth { on_navigate } },
        Screen::CustomerDashboard => rsx! { CustomerDashboard { on_navigate } },
        Screen::ChefDashboard => rsx! { ChefDashboard {} },
        Screen::MealCustomization => rsx! { MealCustomization { on_navigate } },
        Screen::Subscription => rsx! { SubscriptionPlans { on_navigate } },
        Screen::ChefNetwork => rsx! { ChefNetwork { on_navigate } },
        Screen::OrderTracking => rsx! { OrderTracking {} },
        Screen::Payment => rsx! { Payment { on_navigate } },
        Screen::Profile => rsx! { Profile { on_navigate } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if let Some(user) = user {
            Navbar { user, current: screen, on_navigate }
        }
        main {
            class: "screen",
            {view}
        }
    }
}
