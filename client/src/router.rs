//! Which screen is shown, and how sign-in and sign-out move between screens.
//!
//! Two rules react to the session:
//!
//! * signing in lands on the role's dashboard,
//! * losing the session on a private screen falls back to the landing page.
//!
//! Both live in [`next_screen`], which the [`Router`] only calls when the
//! session is re-synced, so re-running it cannot bounce between screens.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::{fmt::Display, str::FromStr};

use dioxus::logger::tracing::{debug, warn};
use shared::types::{Role, User};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Landing,
    Auth,
    CustomerDashboard,
    ChefDashboard,
    MealCustomization,
    Subscription,
    ChefNetwork,
    OrderTracking,
    Payment,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen `{0}`")]
pub struct UnknownScreen(pub String);

impl Screen {
    pub const ALL: [Self; 10] = [
        Self::Landing,
        Self::Auth,
        Self::CustomerDashboard,
        Self::ChefDashboard,
        Self::MealCustomization,
        Self::Subscription,
        Self::ChefNetwork,
        Self::OrderTracking,
        Self::Payment,
        Self::Profile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Auth => "auth",
            Self::CustomerDashboard => "customer-dashboard",
            Self::ChefDashboard => "chef-dashboard",
            Self::MealCustomization => "meal-customization",
            Self::Subscription => "subscription",
            Self::ChefNetwork => "chef-network",
            Self::OrderTracking => "order-tracking",
            Self::Payment => "payment",
            Self::Profile => "profile",
        }
    }

    /// Screens reachable without a session.
    pub fn is_public(self) -> bool {
        matches!(self, Self::Landing | Self::Auth)
    }
}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| UnknownScreen(s.to_owned()))
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn dashboard_for(role: Role) -> Screen {
    match role {
        Role::Chef => Screen::ChefDashboard,
        Role::Customer => Screen::CustomerDashboard,
    }
}

/// Applies the session rules to the current screen.
///
/// `auth_changed` is true only on the call that observes a sign-in or
/// sign-out.
pub fn next_screen(prev: Screen, auth_changed: bool, user: Option<&User>) -> Screen {
    match user {
        Some(user) if auth_changed => dashboard_for(user.role),
        None if !prev.is_public() => Screen::Landing,
        _ => prev,
    }
}

/// The screen actually shown when `requested` is asked for.
pub fn resolve(requested: Screen, user: Option<&User>) -> Screen {
    match user {
        None if requested.is_public() => requested,
        None => Screen::Landing,
        Some(user) if requested.is_public() => dashboard_for(user.role),
        Some(_) => requested,
    }
}

/// Like [`resolve`], for a screen name. Unknown names fall back to the
/// landing page, or to the dashboard once signed in.
pub fn resolve_named(name: &str, user: Option<&User>) -> Screen {
    match name.parse::<Screen>() {
        Ok(screen) => resolve(screen, user),
        Err(err) => {
            warn!("Navigation request ignored: {err}");
            match user {
                Some(user) => dashboard_for(user.role),
                None => Screen::Landing,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    /// Explicit navigation scrolls the page back to the top.
    pub reset_scroll: bool,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    current: Screen,
    authenticated: bool,
}

impl Router {
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Re-applies the session rules after the session may have changed.
    pub fn sync_auth(&mut self, user: Option<&User>) -> Transition {
        let authenticated = user.is_some();
        let auth_changed = authenticated != self.authenticated;
        self.authenticated = authenticated;
        let from = self.current;
        self.current = next_screen(from, auth_changed, user);
        let transition = Transition {
            from,
            to: self.current,
            reset_scroll: false,
        };
        if transition.changed() {
            debug!("Session change moved {from} -> {}", self.current);
        }
        transition
    }

    pub fn navigate(&mut self, requested: Screen, user: Option<&User>) -> Transition {
        self.go(resolve(requested, user))
    }

    pub fn navigate_named(&mut self, name: &str, user: Option<&User>) -> Transition {
        self.go(resolve_named(name, user))
    }

    fn go(&mut self, to: Screen) -> Transition {
        let from = self.current;
        self.current = to;
        let transition = Transition {
            from,
            to,
            reset_scroll: true,
        };
        if transition.changed() {
            debug!("Navigating {from} -> {to}");
        }
        transition
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub screen: Screen,
    pub label: &'static str,
}

const CUSTOMER_MENU: [MenuItem; 6] = [
    MenuItem { screen: Screen::CustomerDashboard, label: "Dashboard" },
    MenuItem { screen: Screen::MealCustomization, label: "Customize Meal" },
    MenuItem { screen: Screen::ChefNetwork, label: "Chef Network" },
    MenuItem { screen: Screen::OrderTracking, label: "Track Order" },
    MenuItem { screen: Screen::Subscription, label: "Subscription" },
    MenuItem { screen: Screen::Profile, label: "Profile" },
];

const CHEF_MENU: [MenuItem; 2] = [
    MenuItem { screen: Screen::ChefDashboard, label: "Dashboard" },
    MenuItem { screen: Screen::Profile, label: "Profile" },
];

pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Chef => &CHEF_MENU,
        Role::Customer => &CUSTOMER_MENU,
    }
}
