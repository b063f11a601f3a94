use super::*;

#[test]
fn starts_empty_and_closed_showing_greeting() {
    let chat = ChatState::default();
    assert!(chat.messages.is_empty());
    assert!(!chat.open);
    assert_eq!(chat.user_message_count(), 0);
    let shown = chat.transcript();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].role, MessageRole::Bot);
    assert_eq!(shown[0].content, GREETING);
}

#[test]
fn greeting_leaves_transcript_after_first_prompt() {
    let mut chat = ChatState::default();
    chat.push_user("hi".to_owned());
    let shown = chat.transcript();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].role, MessageRole::User);
    assert!(shown.iter().all(|m| m.content != GREETING));
}

#[test]
fn prepare_prompt_trims_and_rejects_blank() {
    let chat = ChatState::default();
    assert_eq!(chat.prepare_prompt("  more water?  "), Ok("more water?".to_owned()));
    assert_eq!(chat.prepare_prompt("   "), Err(PromptRejected::Blank));
}

#[test]
fn push_user_then_bot_toggles_loading() {
    let mut chat = ChatState::default();
    chat.push_user("hi".to_owned());
    assert!(chat.loading);
    chat.push_bot("hello".to_owned());
    assert!(!chat.loading);
    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.user_message_count(), 1);
}

#[test]
fn quota_blocks_the_twenty_first_prompt() {
    let mut chat = ChatState::default();
    for i in 0..MAX_USER_MESSAGES - 1 {
        chat.push_user(format!("q{i}"));
        chat.push_bot("a".to_owned());
    }
    assert!(chat.prepare_prompt("last one").is_ok());
    chat.push_user("last one".to_owned());
    assert!(chat.quota_reached());
    assert_eq!(chat.prepare_prompt("again"), Err(PromptRejected::QuotaReached));
}

#[test]
fn quota_error_displays_user_text() {
    assert_eq!(PromptRejected::QuotaReached.to_string(), QUOTA_MESSAGE);
}

#[test]
fn failed_reply_clears_loading_but_keeps_prompt() {
    let mut chat = ChatState::default();
    chat.push_user("hi".to_owned());
    chat.reply_failed();
    assert!(!chat.loading);
    assert_eq!(chat.user_message_count(), 1);
}
