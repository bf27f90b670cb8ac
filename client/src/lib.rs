//! # client
//!
//! Leptos + WASM frontend for the CCI campus hub: an authenticated dashboard
//! shell around projects, events, learning, community, and media pages.
//!
//! Identity lives in a single `SessionState` signal written only through
//! `state::session::SessionGuard`; routes consult `state::routes::decide`
//! before rendering. All data comes from the in-memory `net::mock` backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
