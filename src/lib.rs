//! # examhub-client
//!
//! Leptos + WASM frontend for the ExamHub exam-practice application.
//!
//! The crate centers on the token lifecycle and session-consistency
//! subsystem: credential storage, JWT expiry checks, renewal of expired
//! access tokens against the refresh endpoint, a single-dialog notification
//! gate, and the route guard that decides per navigation whether protected
//! pages may render. Pages and components exist to exercise that subsystem.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
