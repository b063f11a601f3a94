//! Login page: the entry view that guarded routes redirect to.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "csr"))]
use crate::net::api::ApiError;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

const NETWORK_FAILURE: &str = "An error occurred while logging in. Please try again.";

/// Where a failed login attempt is reported.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Debug, PartialEq, Eq)]
enum LoginFailure {
    /// The backend answered; shown as an error notice.
    Notice(String),
    /// The request never completed; shown inline under the form.
    Inline(&'static str),
}

#[cfg(any(test, feature = "csr"))]
fn classify_failure(err: &ApiError) -> LoginFailure {
    match err {
        ApiError::Status { message, .. } => LoginFailure::Notice(format!("Login failed: {message}")),
        _ => LoginFailure::Inline(NETWORK_FAILURE),
    }
}

fn build_login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest { email: email.to_owned(), password: password.to_owned() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let inline_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        inline_error.set(None);
        let request = build_login_request(&email.get_untracked(), &password.get_untracked());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&request).await;
                busy.set(false);
                match result {
                    Ok(resp) => {
                        auth.update(|a| a.login(&resp.token));
                        navigate("/dashboard", NavigateOptions::default());
                        ui.update(|u| {
                            u.success("Login successful!");
                        });
                    }
                    Err(e) => {
                        log::warn!("login: request failed: {e}");
                        match classify_failure(&e) {
                            LoginFailure::Notice(text) => ui.update(|u| {
                                u.error(text);
                            }),
                            LoginFailure::Inline(text) => inline_error.set(Some(text)),
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &navigate, auth, ui);
            inline_error.set(Some(NETWORK_FAILURE));
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Log In"</h2>
                <Show when=move || inline_error.get().is_some()>
                    <p class="auth-card__error">{move || inline_error.get().unwrap_or_default()}</p>
                </Show>
                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-card__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                    "Log In"
                </button>
                <p class="auth-card__alt">
                    "Don't have an account? "
                    <a href="/register">"Sign Up"</a>
                </p>
            </form>
        </div>
    }
}
