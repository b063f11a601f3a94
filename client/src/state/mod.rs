//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state type is wrapped in an `RwSignal` and provided through Leptos
//! context. `auth` lives at the app root; `habits` and `chat` are scoped to
//! the dashboard.

pub mod auth;
pub mod chat;
pub mod habits;
pub mod ui;
