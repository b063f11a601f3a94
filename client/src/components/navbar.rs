//! Top navigation bar.
//!
//! Links switch on the session state: guests see Log In / Sign Up, signed-in
//! users see Profile / Dashboard / Log out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <h1 class="navbar__title">"Habit Tracker"</h1>
            <div class="navbar__links">
                <Show
                    when=move || auth.with(AuthState::is_authenticated)
                    fallback=|| {
                        view! {
                            <a href="/" class="navbar__link">"Log In"</a>
                            <a href="/register" class="navbar__link">"Sign Up"</a>
                        }
                    }
                >
                    <a href="/profile" class="navbar__link">"Profile"</a>
                    <a href="/dashboard" class="navbar__link">"Dashboard"</a>
                    <button class="navbar__link navbar__logout" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
