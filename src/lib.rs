//! # property-client
//!
//! Leptos + WASM browser client for a property-listing REST service.
//!
//! The core (`state`, `net`, `util`) holds the client session, its REST
//! access layer and validation rules, and has no dependency on the DOM. The
//! `app`, `pages` and `components` modules render the session's view-model
//! and forward user events back to it.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
