//! Session store and access guard for the habit tracker client.
//!
//! This crate is UI-framework agnostic so the Leptos client (and tests) can
//! drive the authentication lifecycle without a rendering harness.
//!
//! ARCHITECTURE
//! ============
//! `store` owns the bearer token and its two-state lifecycle, `guard` turns
//! that state into a render/redirect decision for protected views, and
//! `persist` defines the storage capability used to survive a page reload.

pub mod guard;
pub mod persist;
pub mod store;

pub use guard::{AccessGuard, DEFAULT_ENTRY_PATH, Denied, GuardDecision};
pub use persist::{MemoryTokenStore, PersistedSession, StorageError, TokenStore};
pub use store::{SessionState, SessionStore, bearer_header};
