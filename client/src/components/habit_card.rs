//! Dashboard card for a single habit.
//!
//! DESIGN
//! ======
//! Status drives both the corner dot and the hover accent through one BEM
//! modifier, so the stylesheet owns the palette.

#[cfg(test)]
#[path = "habit_card_test.rs"]
mod habit_card_test;

use leptos::prelude::*;

use crate::net::types::{Habit, HabitStatus};
use crate::util::time::display_date;

/// Accent modifier for a habit's current status; habits with no log get
/// the neutral accent.
pub fn accent_modifier(status: Option<HabitStatus>) -> &'static str {
    status.map_or("none", HabitStatus::modifier)
}

#[component]
pub fn HabitCard(habit: Habit, on_edit: Callback<Habit>, on_delete: Callback<Habit>) -> impl IntoView {
    let accent = accent_modifier(habit.status());
    let edit_target = habit.clone();
    let delete_target = habit.clone();

    let details = habit.current_log.clone().map(|log| {
        let start = display_date(&log.start_time).to_owned();
        view! {
            <dl class="habit-card__details">
                <dt>"State:"</dt>
                <dd>{log.is_completed.as_str()}</dd>
                {log.notes.map(|notes| view! { <dt>"Notes:"</dt><dd>{notes}</dd> })}
                <dt>"Start:"</dt>
                <dd>{start}</dd>
                {log.duration.map(|duration| view! { <dt>"Duration:"</dt><dd>{duration}</dd> })}
            </dl>
        }
    });

    view! {
        <article class=format!("habit-card habit-card--{accent}")>
            <span class=format!("habit-card__dot habit-card__dot--{accent}") aria-hidden="true"></span>
            <header class="habit-card__header">
                <h2 class="habit-card__name">{habit.name}</h2>
                <div class="habit-card__actions">
                    <button
                        class="habit-card__edit"
                        title="Edit habit"
                        aria-label="Edit habit"
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "✎"
                    </button>
                    <button
                        class="habit-card__delete"
                        title="Delete habit"
                        aria-label="Delete habit"
                        on:click=move |_| on_delete.run(delete_target.clone())
                    >
                        "🗑"
                    </button>
                </div>
            </header>
            {habit.description.map(|d| view! { <p class="habit-card__description">{d}</p> })}
            {details}
        </article>
    }
}
