use std::cell::Cell;

use super::*;

fn page_or_redirect(guard: &AccessGuard, state: SessionState, built: &Cell<u32>) -> String {
    guarded(
        guard,
        state,
        || {
            built.set(built.get() + 1);
            "page".to_owned()
        },
        |to| format!("redirect:{to}"),
    )
}

#[test]
fn guest_is_redirected_without_building_children() {
    let built = Cell::new(0);
    let out = page_or_redirect(&AccessGuard::default(), SessionState::Guest, &built);
    assert_eq!(out, "redirect:/");
    assert_eq!(built.get(), 0);
}

#[test]
fn authenticated_user_gets_children() {
    let built = Cell::new(0);
    let out = page_or_redirect(&AccessGuard::default(), SessionState::Authenticated, &built);
    assert_eq!(out, "page");
    assert_eq!(built.get(), 1);
}

#[test]
fn session_state_memo_tracks_login() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::default());
    let state = session_state(auth);
    assert_eq!(state.get(), SessionState::Guest);
    auth.update(|a| a.login("tok-1"));
    assert_eq!(state.get(), SessionState::Authenticated);
}

#[test]
fn logout_flips_open_view_to_redirect_on_next_render() {
    let owner = Owner::new();
    owner.set();
    let guard = AccessGuard::default();
    let auth = RwSignal::new(AuthState::default());
    auth.update(|a| a.login("tok-1"));
    let state = session_state(auth);
    let built = Cell::new(0);

    assert_eq!(page_or_redirect(&guard, state.get(), &built), "page");
    assert_eq!(built.get(), 1);

    auth.update(AuthState::logout);
    assert_eq!(state.get(), SessionState::Guest);
    assert_eq!(page_or_redirect(&guard, state.get(), &built), "redirect:/");
    assert_eq!(page_or_redirect(&guard, state.get(), &built), "redirect:/");
    assert_eq!(built.get(), 1);
}
