//! # client
//!
//! Leptos + WASM single-page client for the habit tracker.
//!
//! This crate contains pages, components, application state and the REST
//! API layer. Session ownership and the route-guard decision come from the
//! framework-agnostic `session` crate; this crate binds them to
//! `localStorage` and the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
