//! Networking modules for the habit REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls (attaching the session's bearer token where
//! required) and `types` defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
