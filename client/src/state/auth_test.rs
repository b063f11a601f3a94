use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_guest() {
    let state = AuthState::default();
    assert_eq!(state.state(), SessionState::Guest);
    assert!(state.token().is_none());
}

#[test]
fn auth_state_restore_outside_browser_is_guest() {
    let state = AuthState::restore();
    assert!(!state.is_authenticated());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_exposes_owned_token() {
    let mut state = AuthState::default();
    state.login("abc");
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("abc".to_owned()));
}

#[test]
fn second_login_replaces_token() {
    let mut state = AuthState::default();
    state.login("abc");
    state.login("def");
    assert_eq!(state.token(), Some("def".to_owned()));
}

#[test]
fn logout_returns_to_guest() {
    let mut state = AuthState::default();
    state.login("abc");
    state.logout();
    assert_eq!(state.state(), SessionState::Guest);
    assert!(state.token().is_none());
}
