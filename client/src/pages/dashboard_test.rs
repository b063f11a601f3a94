use super::*;

#[test]
fn delete_message_quotes_habit_name() {
    assert_eq!(
        delete_habit_message("Morning run"),
        "Are you sure you want to delete this habit: \"Morning run\"? This action cannot be undone."
    );
}

#[test]
fn summary_items_render_counts_in_fixed_order() {
    let items = summary_items(StatusSummary { completed: 2, pending: 1, ongoing: 0, uncompleted: 3 });
    assert_eq!(items, [
        "✅ 2 completed".to_owned(),
        "⏳ 1 pendings".to_owned(),
        "🕐 0 ongoing".to_owned(),
        "❌ 3 uncompleted".to_owned(),
    ]);
}
