//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clocks,
//! HTML rendering) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod markdown;
pub mod session_storage;
pub mod time;
pub mod validation;
