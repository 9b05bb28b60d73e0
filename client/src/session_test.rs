use std::{cell::RefCell, rc::Rc};

use super::*;
use shared::catalog::{DEMO_CHEF_ID, DEMO_CUSTOMER_ID};

fn instant() -> MockAuthenticator {
    MockAuthenticator::from_timings(&Timings::instant())
}

fn signed_in_customer() -> SessionState {
    let mut state = SessionState::default();
    state.sign_in(demo_customer());
    state
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn starts_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn sign_out_clears_user() {
    let mut state = signed_in_customer();
    assert!(state.is_authenticated());
    state.sign_out();
    assert!(!state.is_authenticated());
}

#[test]
fn sign_in_replaces_previous_user() {
    let mut state = signed_in_customer();
    state.sign_in(demo_chef("chef@example.com"));
    assert_eq!(state.user().map(|user| user.id.as_str()), Some(DEMO_CHEF_ID));
}

#[test]
fn update_profile_edits_contact_fields() {
    let mut state = signed_in_customer();
    assert!(state.update_profile(" Sruthi K ", "sk@example.com", "+91 90000 00000"));
    let user = state.user().unwrap();
    assert_eq!(user.name, "Sruthi K");
    assert_eq!(user.email, "sk@example.com");
    assert_eq!(user.phone, "+91 90000 00000");
    assert_eq!(user.id, DEMO_CUSTOMER_ID);
}

#[test]
fn update_profile_without_user_is_noop() {
    let mut state = SessionState::default();
    assert!(!state.update_profile("a", "b", "c"));
    assert!(state.user().is_none());
}

#[test]
fn dietary_preference_toggles() {
    let mut state = signed_in_customer();
    assert!(state.toggle_dietary_preference("Vegan"));
    assert!(state.user().unwrap().dietary_preferences.contains(&"Vegan".to_owned()));

    assert!(!state.toggle_dietary_preference("Vegetarian"));
    assert_eq!(
        state.user().unwrap().dietary_preferences,
        ["Low Carb".to_owned(), "Vegan".to_owned()]
    );
}

// =============================================================
// MockAuthenticator
// =============================================================

#[tokio::test]
async fn customer_login_resolves_to_demo_customer() {
    let user = instant()
        .login("anyone@example.com", "", Role::Customer)
        .await;
    assert_eq!(user, demo_customer());
    assert_eq!(user.credits, Some(45));
}

#[tokio::test]
async fn chef_login_keeps_typed_email() {
    let user = instant()
        .login("priya@kitchen.in", "secret", Role::Chef)
        .await;
    assert_eq!(user.id, DEMO_CHEF_ID);
    assert_eq!(user.email, "priya@kitchen.in");
    assert!(user.is_chef());
    assert!(user.credits.is_none());
}

#[tokio::test]
async fn customer_signup_starts_with_zero_credits() {
    let user = instant()
        .signup("Asha", "asha@example.com", "pw", Role::Customer)
        .await;
    assert!(user.id.starts_with("customer-"));
    assert_eq!(user.name, "Asha");
    assert_eq!(user.phone, "");
    assert_eq!(user.credits, Some(0));
    assert!(user.addresses.is_empty());
}

#[tokio::test]
async fn chef_signup_has_no_credits() {
    let user = instant()
        .signup("Ravi", "ravi@example.com", "pw", Role::Chef)
        .await;
    assert!(user.id.starts_with("chef-"));
    assert_eq!(user.role, Role::Chef);
    assert!(user.credits.is_none());
}

#[test]
fn default_authenticator_uses_configured_delay() {
    assert_eq!(MockAuthenticator::default().delay, TIMINGS.auth_delay);
}

#[test]
fn missing_provider_message() {
    assert_eq!(
        SessionError::MissingProvider.to_string(),
        "use_session must be called inside a component tree that provides a Session"
    );
}

// =============================================================
// Session inside a component tree
// =============================================================

/// Collects values observed from inside a running `VirtualDom`.
struct Recorder<T>(Rc<RefCell<Vec<T>>>);

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self(Rc::default())
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Recorder<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Recorder<T> {
    fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    fn values(&self) -> Vec<T> {
        self.0.borrow().clone()
    }
}

/// Polls spawned tasks until the dom has nothing left to do.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..8 {
        let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work());
        if work.await.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

#[component]
fn SessionLookup(results: Recorder<Result<(), SessionError>>) -> Element {
    use_hook(|| results.push(try_use_session().map(|_| ())));
    rsx! {}
}

#[component]
fn ProvidedSessionLookup(results: Recorder<Result<(), SessionError>>) -> Element {
    use_session_provider(instant());
    rsx! {
        SessionLookup { results }
    }
}

#[test]
fn session_lookup_without_provider_fails() {
    let results = Recorder::default();
    let mut dom = VirtualDom::new_with_props(
        SessionLookup,
        SessionLookupProps {
            results: results.clone(),
        },
    );
    dom.rebuild_in_place();
    assert_eq!(results.values(), [Err(SessionError::MissingProvider)]);
}

#[test]
fn session_lookup_under_provider_succeeds() {
    let results = Recorder::default();
    let mut dom = VirtualDom::new_with_props(
        ProvidedSessionLookup,
        ProvidedSessionLookupProps {
            results: results.clone(),
        },
    );
    dom.rebuild_in_place();
    assert_eq!(results.values(), [Ok(())]);
}

#[test]
#[should_panic(expected = "use_session must be called inside")]
fn use_session_without_provider_panics() {
    let mut dom = VirtualDom::new(|| rsx! {});
    dom.rebuild_in_place();
    dom.in_runtime(|| ScopeId::ROOT.in_runtime(use_session));
}

#[component]
fn SessionFlow(role: Role, observed: Recorder<Option<Role>>) -> Element {
    let mut session = use_session_provider(instant());
    use_hook(|| {
        spawn(async move {
            observed.push(session.user().map(|user| user.role));

            session
                .login("someone@example.com".to_owned(), "pw".to_owned(), role)
                .await;
            assert!(session.is_authenticated());
            observed.push(session.user().map(|user| user.role));

            session.logout();
            assert!(!session.is_authenticated());
            observed.push(session.user().map(|user| user.role));

            session
                .signup(
                    "Asha".to_owned(),
                    "asha@example.com".to_owned(),
                    "pw".to_owned(),
                    role,
                )
                .await;
            assert!(session.is_authenticated());
            observed.push(session.user().map(|user| user.role));

            session.logout();
            observed.push(session.user().map(|user| user.role));
        })
    });
    rsx! {}
}

async fn run_session_flow(role: Role) -> Vec<Option<Role>> {
    let observed = Recorder::default();
    let mut dom = VirtualDom::new_with_props(
        SessionFlow,
        SessionFlowProps {
            role,
            observed: observed.clone(),
        },
    );
    dom.rebuild_in_place();
    settle(&mut dom).await;
    observed.values()
}

#[tokio::test]
async fn customer_session_signs_in_and_out() {
    assert_eq!(
        run_session_flow(Role::Customer).await,
        [None, Some(Role::Customer), None, Some(Role::Customer), None]
    );
}

#[tokio::test]
async fn chef_session_signs_in_and_out() {
    assert_eq!(
        run_session_flow(Role::Chef).await,
        [None, Some(Role::Chef), None, Some(Role::Chef), None]
    );
}
