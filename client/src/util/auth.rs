//! Route guarding for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route is wrapped in [`Protected`]. The page's children are
//! built through [`AccessGuard::admit`], so a guest never starts the page's
//! data fetches.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::{AccessGuard, Denied, SessionState};

use crate::state::auth::AuthState;

/// Memoized session state; changes only when the session flips.
pub fn session_state(auth: RwSignal<AuthState>) -> Memo<SessionState> {
    Memo::new(move |_| auth.with(AuthState::state))
}

/// Build the protected view with `render`, or the redirect with `redirect`.
/// `render` is never called for a guest.
pub fn guarded<T>(
    guard: &AccessGuard,
    state: SessionState,
    render: impl FnOnce() -> T,
    redirect: impl FnOnce(String) -> T,
) -> T {
    match guard.admit(state, render) {
        Ok(view) => view,
        Err(Denied { redirect_to }) => redirect(redirect_to),
    }
}

/// Render `children` for an authenticated session; redirect guests to the
/// entry view. Re-evaluated whenever the session state flips.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = AccessGuard::default();
    let state = session_state(auth);

    move || {
        guarded(
            &guard,
            state.get(),
            || children().into_any(),
            |to| view! { <Redirect path=to/> }.into_any(),
        )
    }
}
