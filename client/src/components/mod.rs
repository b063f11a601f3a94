//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and dialogs while reading/writing shared
//! state from Leptos context providers.

pub mod chat_bot;
pub mod confirm_dialog;
pub mod habit_card;
pub mod habit_form_dialog;
pub mod navbar;
pub mod notice_banner;
