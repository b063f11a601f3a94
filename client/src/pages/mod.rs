//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, dialogs, notices)
//! and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;
