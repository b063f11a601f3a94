//! Habit-list state for the dashboard.
//!
//! DESIGN
//! ======
//! The list is refetched after every create/update/delete rather than
//! patched locally, so `items` always mirrors the backend. `HabitForm` holds
//! the editable text of the create/edit dialog and converts to the request
//! body only on submit.

#[cfg(test)]
#[path = "habits_test.rs"]
mod habits_test;

use crate::net::types::{Habit, HabitLog, HabitRequest, HabitStatus};
use crate::util::time::datetime_local_value;
use crate::util::validation::validate_habit_name;

#[derive(Clone, Debug, Default)]
pub struct HabitsState {
    pub items: Vec<Habit>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HabitsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<Habit>) {
        self.items = items;
        self.loading = false;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    #[must_use]
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_habits(&self.items)
    }
}

/// Per-status counts for the "Today you have" banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub completed: usize,
    pub pending: usize,
    pub ongoing: usize,
    pub uncompleted: usize,
}

impl StatusSummary {
    /// Habits without a current log are not counted.
    #[must_use]
    pub fn from_habits(habits: &[Habit]) -> Self {
        habits.iter().filter_map(Habit::status).fold(Self::default(), |mut acc, status| {
            match status {
                HabitStatus::Completed => acc.completed += 1,
                HabitStatus::Pending => acc.pending += 1,
                HabitStatus::OnGoing => acc.ongoing += 1,
                HabitStatus::Uncompleted => acc.uncompleted += 1,
            }
            acc
        })
    }
}

/// Editable fields of the create/edit habit dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HabitForm {
    pub name: String,
    pub description: String,
    pub status: HabitStatus,
    pub notes: String,
    /// `datetime-local` value (`YYYY-MM-DDTHH:MM`).
    pub start_time: String,
    /// `HH:MM:SS`.
    pub duration: String,
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl HabitForm {
    /// Blank form for a new habit, starting now.
    #[must_use]
    pub fn empty(now_iso: &str) -> Self {
        Self {
            start_time: datetime_local_value(now_iso),
            ..Self::default()
        }
    }

    /// Prefill from an existing habit. A habit without a log starts as
    /// pending, now.
    #[must_use]
    pub fn from_habit(habit: &Habit, now_iso: &str) -> Self {
        let log = habit.current_log.as_ref();
        let start = log.map_or(now_iso, |l| l.start_time.as_str());
        Self {
            name: habit.name.clone(),
            description: habit.description.clone().unwrap_or_default(),
            status: log.map(|l| l.is_completed).unwrap_or_default(),
            notes: log.and_then(|l| l.notes.clone()).unwrap_or_default(),
            start_time: datetime_local_value(start),
            duration: log.and_then(|l| l.duration.clone()).unwrap_or_default(),
        }
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the name-rule message when the name is too short.
    pub fn to_request(&self) -> Result<HabitRequest, &'static str> {
        validate_habit_name(&self.name)?;
        Ok(HabitRequest {
            name: self.name.trim().to_owned(),
            description: non_blank(&self.description),
            current_log: Some(HabitLog {
                is_completed: self.status,
                notes: non_blank(&self.notes),
                start_time: self.start_time.trim().to_owned(),
                duration: non_blank(&self.duration),
            }),
        })
    }
}
