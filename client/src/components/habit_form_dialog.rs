//! Create/edit dialog for a habit and its current log.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the dashboard. The dialog issues the create or update request
//! itself, posts a notice, and calls `on_saved` so the dashboard refetches.

#[cfg(test)]
#[path = "habit_form_dialog_test.rs"]
mod habit_form_dialog_test;

use leptos::prelude::*;

use crate::net::types::HabitStatus;
use crate::state::auth::AuthState;
use crate::state::habits::HabitForm;
use crate::state::ui::UiState;

/// Which request the dialog submits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HabitDialogMode {
    Create,
    Edit(i64),
}

impl HabitDialogMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Create New Habit",
            Self::Edit(_) => "Edit Habit",
        }
    }

    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Create, false) => "Create Habit",
            (Self::Create, true) => "Creating...",
            (Self::Edit(_), false) => "Save changes",
            (Self::Edit(_), true) => "Saving...",
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            Self::Create => "Initial State",
            Self::Edit(_) => "Status",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Create => "Habit created!",
            Self::Edit(_) => "Habit updated!",
        }
    }
}

#[component]
pub fn HabitFormDialog(
    mode: HabitDialogMode,
    initial: HabitForm,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let form = RwSignal::new(initial);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let request = match form.with_untracked(HabitForm::to_request) {
            Ok(request) => request,
            Err(message) => {
                ui.update(|u| {
                    u.error(message);
                });
                return;
            }
        };
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match mode {
                HabitDialogMode::Create => crate::net::api::create_habit(&token, &request).await,
                HabitDialogMode::Edit(id) => crate::net::api::update_habit(&token, id, &request).await,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    ui.update(|u| {
                        u.success(mode.success_message());
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    let message = e.user_message();
                    ui.update(|u| {
                        u.error(message.clone());
                    });
                    error.set(Some(message));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, request);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog habit-dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{mode.title()}</h2>
                <form class="habit-dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Name *"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        {mode.status_label()}
                        <select
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.status.as_str())
                            on:change=move |ev| {
                                if let Some(status) = HabitStatus::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.status = status);
                                }
                            }
                        >
                            {HabitStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option
                                            value=status.as_str()
                                            selected=move || form.with(|f| f.status == status)
                                        >
                                            {status.as_str()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Notes"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || form.with(|f| f.notes.clone())
                            on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Start Time"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || form.with(|f| f.start_time.clone())
                            on:input=move |ev| form.update(|f| f.start_time = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Duration (HH:MM:SS)"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="00:30:00"
                            prop:value=move || form.with(|f| f.duration.clone())
                            on:input=move |ev| form.update(|f| f.duration = event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.with(Option::is_some)>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || mode.submit_label(busy.get())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
