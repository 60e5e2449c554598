//! # link-client
//!
//! Leptos + WASM frontend fragment for Link: a full-screen loading overlay and
//! a browser-local auth context that keeps accounts and the active session in
//! `localStorage` in place of a backend.
//!
//! Everything persistent goes through the `storage::KeyValueStore` trait, so
//! the auth logic runs natively in tests against `MemoryStorage`.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod context;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already initialised: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
