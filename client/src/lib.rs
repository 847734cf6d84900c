//! # client
//!
//! Leptos + WASM front end for LoanLink.
//!
//! This crate contains route guards, pages, components, session state, the
//! query cache and the REST helpers that talk to the backend. Domain rules
//! (access gate, application lifecycle, validation) live in `lending`; this
//! crate wires them to the browser.

pub mod app;
pub mod components;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
