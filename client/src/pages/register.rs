//! Sign-up page with per-field validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "csr"))]
use crate::net::api::ApiError;
use crate::net::types::RegisterRequest;
use crate::state::ui::UiState;
use crate::util::validation::{RegisterErrors, validate_register};

#[cfg(any(test, feature = "csr"))]
const UNEXPECTED_FAILURE: &str = "An unexpected error occurred. Please try again later.";

/// Register form fields, used to clear the matching error on edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Name,
    LastName,
    Email,
    Password,
}

fn set_field(form: &mut RegisterRequest, errors: &mut RegisterErrors, field: Field, value: String) {
    match field {
        Field::Name => {
            form.name = value;
            errors.name = None;
        }
        Field::LastName => {
            form.last_name = value;
            errors.last_name = None;
        }
        Field::Email => {
            form.email = value;
            errors.email = None;
        }
        Field::Password => {
            form.password = value;
            errors.password = None;
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => message.clone(),
        _ => UNEXPECTED_FAILURE.to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterRequest::default());
    let errors = RwSignal::new(RegisterErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let request = form.get_untracked();
        if let Err(found) = validate_register(&request) {
            errors.set(found);
            return;
        }
        errors.set(RegisterErrors::default());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(&request).await;
                busy.set(false);
                match result {
                    Ok(()) => {
                        ui.update(|u| {
                            u.success("Account created successfully");
                        });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("register: request failed: {e}");
                        let text = failure_text(&e);
                        ui.update(|u| {
                            u.error(text.clone());
                        });
                        failure.set(Some(text));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &navigate, ui);
            busy.set(false);
        }
    };

    let field_input = move |label: &'static str, kind: &'static str, field: Field| {
        let value = move || {
            form.with(|f| match field {
                Field::Name => f.name.clone(),
                Field::LastName => f.last_name.clone(),
                Field::Email => f.email.clone(),
                Field::Password => f.password.clone(),
            })
        };
        let error = move || {
            errors.with(|e| match field {
                Field::Name => e.name,
                Field::LastName => e.last_name,
                Field::Email => e.email,
                Field::Password => e.password,
            })
        };
        view! {
            <label class="auth-card__label">
                {label}
                <input
                    class="auth-card__input"
                    type=kind
                    required
                    prop:value=value
                    on:input=move |ev| {
                        let next = event_target_value(&ev);
                        form.update(|f| errors.update(|e| set_field(f, e, field, next)));
                    }
                />
                {move || error().map(|text| view! { <span class="auth-card__field-error">{text}</span> })}
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Sign Up"</h2>
                <Show when=move || failure.with(Option::is_some)>
                    <p class="auth-card__error">{move || failure.get().unwrap_or_default()}</p>
                </Show>
                {field_input("Name", "text", Field::Name)}
                {field_input("Last Name", "text", Field::LastName)}
                {field_input("Email", "email", Field::Email)}
                {field_input("Password", "password", Field::Password)}
                <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
                <p class="auth-card__alt">
                    "Already have an account? "
                    <a href="/">"Log In"</a>
                </p>
            </form>
        </div>
    }
}
