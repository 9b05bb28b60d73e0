//! The single signed-in identity and the mock authenticator behind it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use dioxus::{
    logger::tracing::{debug, info},
    prelude::*,
};
use shared::{
    catalog::{demo_chef, demo_customer},
    types::{Role, User},
};
use thiserror::Error;

use crate::{
    clock::{sleep, unix_millis},
    config::{TIMINGS, Timings},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Returns `false` when nobody is signed in.
    pub fn update_profile(&mut self, name: &str, email: &str, phone: &str) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };
        user.name = name.trim().to_owned();
        user.email = email.trim().to_owned();
        user.phone = phone.trim().to_owned();
        true
    }

    /// Flips `tag` in the user's dietary preferences and reports whether it
    /// is now selected.
    pub fn toggle_dietary_preference(&mut self, tag: &str) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };
        let preferences = &mut user.dietary_preferences;
        match preferences.iter().position(|selected| selected == tag) {
            Some(index) => {
                preferences.remove(index);
                false
            }
            None => {
                preferences.push(tag.to_owned());
                true
            }
        }
    }
}

/// Resolves every login to a canned identity after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAuthenticator {
    pub delay: Duration,
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::from_timings(&TIMINGS)
    }
}

impl MockAuthenticator {
    pub fn from_timings(timings: &Timings) -> Self {
        Self {
            delay: timings.auth_delay,
        }
    }

    pub async fn login(&self, email: &str, _password: &str, role: Role) -> User {
        sleep(self.delay).await;
        match role {
            Role::Customer => demo_customer(),
            Role::Chef => demo_chef(email),
        }
    }

    pub async fn signup(&self, name: &str, email: &str, _password: &str, role: Role) -> User {
        sleep(self.delay).await;
        User {
            id: format!("{role}-{}", unix_millis()),
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            phone: String::new(),
            role,
            photo: None,
            addresses: vec![],
            dietary_preferences: vec![],
            subscription_plan_id: None,
            credits: match role {
                Role::Customer => Some(0),
                Role::Chef => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("use_session must be called inside a component tree that provides a Session")]
    MissingProvider,
}

/// Handle to the shared session, provided once at the root of the app.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    state: Signal<SessionState>,
    authenticator: MockAuthenticator,
}

impl Session {
    pub fn new(authenticator: MockAuthenticator) -> Self {
        Self {
            state: Signal::new(SessionState::default()),
            authenticator,
        }
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub async fn login(mut self, email: String, password: String, role: Role) -> User {
        debug!("Logging in as {role} with email='{email}'");
        let user = self.authenticator.login(&email, &password, role).await;
        info!("Signed in: id='{}', role={role}", user.id);
        self.state.write().sign_in(user.clone());
        user
    }

    pub async fn signup(
        mut self,
        name: String,
        email: String,
        password: String,
        role: Role,
    ) -> User {
        debug!("Signing up as {role} with email='{email}'");
        let user = self
            .authenticator
            .signup(&name, &email, &password, role)
            .await;
        info!("Account created: id='{}', role={role}", user.id);
        self.state.write().sign_in(user.clone());
        user
    }

    pub fn logout(&mut self) {
        info!("Signed out");
        self.state.write().sign_out();
    }

    pub fn update_profile(&mut self, name: &str, email: &str, phone: &str) -> bool {
        let updated = self.state.write().update_profile(name, email, phone);
        if updated {
            info!("Profile updated");
        }
        updated
    }

    pub fn toggle_dietary_preference(&mut self, tag: &str) -> bool {
        self.state.write().toggle_dietary_preference(tag)
    }
}

/// Creates the session and makes it available to every descendant.
pub fn use_session_provider(authenticator: MockAuthenticator) -> Session {
    use_context_provider(|| Session::new(authenticator))
}

pub fn try_use_session() -> Result<Session, SessionError> {
    try_use_context::<Session>().ok_or(SessionError::MissingProvider)
}

/// Panics when no ancestor provides a [`Session`].
pub fn use_session() -> Session {
    match try_use_session() {
        Ok(session) => session,
        Err(err) => panic!("{err}"),
    }
}
