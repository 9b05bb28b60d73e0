use super::*;
use shared::catalog::{demo_chef, demo_customer};

fn signed_in(screen: Screen, user: &User) -> Router {
    let mut router = Router::default();
    router.sync_auth(Some(user));
    router.navigate(screen, Some(user));
    router
}

// =============================================================
// Screen names
// =============================================================

#[test]
fn screen_names_round_trip() {
    for screen in Screen::ALL {
        assert_eq!(screen.to_string().parse::<Screen>(), Ok(screen));
    }
}

#[test]
fn unknown_screen_name_is_rejected() {
    let err = "settings".parse::<Screen>().unwrap_err();
    assert_eq!(err, UnknownScreen("settings".to_owned()));
    assert_eq!(err.to_string(), "unknown screen `settings`");
}

#[test]
fn only_landing_and_auth_are_public() {
    let public: Vec<Screen> = Screen::ALL.into_iter().filter(|s| s.is_public()).collect();
    assert_eq!(public, [Screen::Landing, Screen::Auth]);
}

// =============================================================
// next_screen
// =============================================================

#[test]
fn sign_in_redirects_to_role_dashboard() {
    let customer = demo_customer();
    let chef = demo_chef("chef@example.com");
    assert_eq!(
        next_screen(Screen::Auth, true, Some(&customer)),
        Screen::CustomerDashboard
    );
    assert_eq!(next_screen(Screen::Auth, true, Some(&chef)), Screen::ChefDashboard);
}

#[test]
fn post_login_redirect_is_idempotent() {
    let customer = demo_customer();
    let once = next_screen(Screen::Auth, true, Some(&customer));
    let twice = next_screen(once, true, Some(&customer));
    assert_eq!(once, twice);
}

#[test]
fn auth_drop_on_private_screen_resets_to_landing() {
    assert_eq!(next_screen(Screen::Payment, true, None), Screen::Landing);
    assert_eq!(next_screen(Screen::Profile, false, None), Screen::Landing);
}

#[test]
fn auth_drop_on_public_screen_keeps_it() {
    assert_eq!(next_screen(Screen::Landing, true, None), Screen::Landing);
    assert_eq!(next_screen(Screen::Auth, true, None), Screen::Auth);
}

#[test]
fn unchanged_session_keeps_screen() {
    let customer = demo_customer();
    assert_eq!(
        next_screen(Screen::ChefNetwork, false, Some(&customer)),
        Screen::ChefNetwork
    );
}

// =============================================================
// resolve
// =============================================================

#[test]
fn unauthenticated_requests_are_limited_to_public_screens() {
    assert_eq!(resolve(Screen::Auth, None), Screen::Auth);
    assert_eq!(resolve(Screen::Payment, None), Screen::Landing);
    assert_eq!(resolve_named("profile", None), Screen::Landing);
    assert_eq!(resolve_named("nowhere", None), Screen::Landing);
}

#[test]
fn authenticated_unknown_names_fall_back_to_dashboard() {
    let chef = demo_chef("chef@example.com");
    assert_eq!(resolve_named("nowhere", Some(&chef)), Screen::ChefDashboard);
    assert_eq!(
        resolve_named("", Some(&demo_customer())),
        Screen::CustomerDashboard
    );
}

#[test]
fn authenticated_public_requests_go_to_dashboard() {
    let customer = demo_customer();
    assert_eq!(resolve(Screen::Landing, Some(&customer)), Screen::CustomerDashboard);
    assert_eq!(resolve(Screen::Auth, Some(&customer)), Screen::CustomerDashboard);
}

#[test]
fn authenticated_private_requests_pass() {
    let customer = demo_customer();
    assert_eq!(resolve_named("chef-network", Some(&customer)), Screen::ChefNetwork);
}

// =============================================================
// Router
// =============================================================

#[test]
fn router_starts_on_landing() {
    assert_eq!(Router::default().current(), Screen::Landing);
}

#[test]
fn sync_auth_redirects_once_per_sign_in() {
    let customer = demo_customer();
    let mut router = Router::default();
    router.navigate(Screen::Auth, None);

    let first = router.sync_auth(Some(&customer));
    assert_eq!(first.to, Screen::CustomerDashboard);
    assert!(!first.reset_scroll);

    router.navigate(Screen::Subscription, Some(&customer));
    let again = router.sync_auth(Some(&customer));
    assert!(!again.changed());
    assert_eq!(router.current(), Screen::Subscription);
}

#[test]
fn sync_auth_after_logout_on_payment_lands() {
    let customer = demo_customer();
    let mut router = signed_in(Screen::Payment, &customer);
    assert_eq!(router.current(), Screen::Payment);

    let transition = router.sync_auth(None);
    assert_eq!(transition.from, Screen::Payment);
    assert_eq!(router.current(), Screen::Landing);
}

#[test]
fn explicit_navigation_resets_scroll() {
    let mut router = Router::default();
    let transition = router.navigate(Screen::Auth, None);
    assert_eq!(transition, Transition { from: Screen::Landing, to: Screen::Auth, reset_scroll: true });
}

#[test]
fn navigating_to_current_screen_is_harmless() {
    let customer = demo_customer();
    let mut router = signed_in(Screen::ChefNetwork, &customer);
    let transition = router.navigate(Screen::ChefNetwork, Some(&customer));
    assert!(!transition.changed());
    assert_eq!(router.current(), Screen::ChefNetwork);
}

#[test]
fn navigate_named_uses_fallbacks() {
    let chef = demo_chef("chef@example.com");
    let mut router = signed_in(Screen::Profile, &chef);
    router.navigate_named("bogus", Some(&chef));
    assert_eq!(router.current(), Screen::ChefDashboard);
}

// =============================================================
// Menus
// =============================================================

#[test]
fn chef_menu_is_dashboard_and_profile() {
    let screens: Vec<Screen> = menu_for(Role::Chef).iter().map(|item| item.screen).collect();
    assert_eq!(screens, [Screen::ChefDashboard, Screen::Profile]);
}

#[test]
fn customer_menu_starts_with_dashboard() {
    let menu = menu_for(Role::Customer);
    assert_eq!(menu.len(), 6);
    assert_eq!(menu[0].screen, Screen::CustomerDashboard);
    assert!(menu.iter().all(|item| !item.screen.is_public()));
}
