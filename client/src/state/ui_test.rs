use super::*;

#[test]
fn notices_get_increasing_ids() {
    let mut ui = UiState::default();
    let a = ui.success("Habit created");
    let b = ui.error("Failed to create habit");
    assert!(b > a);
    assert_eq!(ui.notices.len(), 2);
    assert_eq!(ui.notices[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut ui = UiState::default();
    let a = ui.success("one");
    let b = ui.success("two");
    ui.dismiss(a);
    assert_eq!(ui.notices.len(), 1);
    assert_eq!(ui.notices[0].id, b);
    ui.dismiss(a);
    assert_eq!(ui.notices.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut ui = UiState::default();
    let a = ui.error("x");
    ui.dismiss(a);
    assert!(ui.notices.is_empty());
    assert!(ui.success("y") > a);
}

#[test]
fn kind_modifiers() {
    assert_eq!(NoticeKind::Success.modifier(), "success");
    assert_eq!(NoticeKind::Error.modifier(), "error");
}
