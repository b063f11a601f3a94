//! Dashboard page: habit list, status summary, CRUD dialogs and the chat
//! assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only behind `Protected`, so the first habit fetch never runs for
//! a guest. Every successful mutation triggers a full refetch.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::chat_bot::ChatBot;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::habit_card::HabitCard;
use crate::components::habit_form_dialog::{HabitDialogMode, HabitFormDialog};
use crate::net::types::Habit;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::habits::{HabitForm, HabitsState, StatusSummary};
use crate::state::ui::UiState;
use crate::util::time::now_iso;

fn delete_habit_message(name: &str) -> String {
    format!("Are you sure you want to delete this habit: \"{name}\"? This action cannot be undone.")
}

fn summary_items(summary: StatusSummary) -> [String; 4] {
    [
        format!("✅ {} completed", summary.completed),
        format!("⏳ {} pendings", summary.pending),
        format!("🕐 {} ongoing", summary.ongoing),
        format!("❌ {} uncompleted", summary.uncompleted),
    ]
}

/// Fetch the habit list into `habits`, replacing whatever was there.
fn load_habits(auth: RwSignal<AuthState>, habits: RwSignal<HabitsState>) {
    let Some(token) = auth.with_untracked(AuthState::token) else {
        return;
    };
    habits.update(HabitsState::begin_load);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_habits(&token).await {
            Ok(items) => habits.update(|h| h.loaded(items)),
            Err(e) => {
                log::warn!("dashboard: habit fetch failed: {e}");
                habits.update(|h| h.failed(e.user_message()));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        habits.update(|h| h.loaded(Vec::new()));
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let habits = RwSignal::new(HabitsState::default());
    provide_context(RwSignal::new(ChatState::default()));

    load_habits(auth, habits);

    let dialog = RwSignal::new(None::<(HabitDialogMode, HabitForm)>);
    let pending_delete = RwSignal::new(None::<Habit>);

    let on_create = move |_| dialog.set(Some((HabitDialogMode::Create, HabitForm::empty(&now_iso()))));
    let on_edit = Callback::new(move |habit: Habit| {
        let form = HabitForm::from_habit(&habit, &now_iso());
        dialog.set(Some((HabitDialogMode::Edit(habit.id), form)));
    });
    let on_delete_request = Callback::new(move |habit: Habit| pending_delete.set(Some(habit)));
    let on_dialog_cancel = Callback::new(move |()| dialog.set(None));
    let on_saved = Callback::new(move |()| {
        dialog.set(None);
        load_habits(auth, habits);
    });
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(habit) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_habit(&token, habit.id).await {
                Ok(()) => {
                    ui.update(|u| {
                        u.success("Habit deleted successfully");
                    });
                    load_habits(auth, habits);
                }
                Err(e) => ui.update(|u| {
                    u.error(e.user_message());
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, habit, ui);
        }
    });

    view! {
        <div class="dashboard-page">
            <section class="dashboard-page__summary">
                <span>"🔥 Today you have:"</span>
                <div class="dashboard-page__counts">
                    {move || {
                        summary_items(habits.with(HabitsState::summary))
                            .into_iter()
                            .map(|item| view! { <span>{item}</span> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <header class="dashboard-page__header">
                <h1>"Your Habits"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ Create Habit"
                </button>
            </header>

            {move || {
                let state = habits.get();
                if state.loading {
                    return view! { <p class="dashboard-page__status">"Loading habits..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="dashboard-page__error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p class="dashboard-page__status">"You don't have habits yet"</p> }.into_any();
                }
                view! {
                    <div class="dashboard-page__grid">
                        {state
                            .items
                            .into_iter()
                            .map(|habit| {
                                view! { <HabitCard habit=habit on_edit=on_edit on_delete=on_delete_request/> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}

            {move || {
                dialog
                    .get()
                    .map(|(mode, initial)| {
                        view! {
                            <HabitFormDialog
                                mode=mode
                                initial=initial
                                on_saved=on_saved
                                on_cancel=on_dialog_cancel
                            />
                        }
                    })
            }}

            {move || {
                pending_delete
                    .get()
                    .map(|habit| {
                        view! {
                            <ConfirmDialog
                                title="Confirm Deletion"
                                message=delete_habit_message(&habit.name)
                                confirm_label="Yes, delete"
                                on_confirm=on_delete_confirm
                                on_cancel=on_delete_cancel
                            />
                        }
                    })
            }}

            <ChatBot/>
        </div>
    }
}
