use super::*;

#[test]
fn create_mode_labels() {
    let mode = HabitDialogMode::Create;
    assert_eq!(mode.title(), "Create New Habit");
    assert_eq!(mode.submit_label(false), "Create Habit");
    assert_eq!(mode.submit_label(true), "Creating...");
    assert_eq!(mode.status_label(), "Initial State");
    assert_eq!(mode.success_message(), "Habit created!");
}

#[test]
fn edit_mode_labels() {
    let mode = HabitDialogMode::Edit(4);
    assert_eq!(mode.title(), "Edit Habit");
    assert_eq!(mode.submit_label(false), "Save changes");
    assert_eq!(mode.submit_label(true), "Saving...");
    assert_eq!(mode.status_label(), "Status");
    assert_eq!(mode.success_message(), "Habit updated!");
}
