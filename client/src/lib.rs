//! # client
//!
//! Leptos frontend for the AOSSIE website, rendered on the server and
//! hydrated in the browser.
//!
//! This crate contains pages, presentational components, the navigation and
//! display-mode state models, and the browser glue behind them. The server
//! binary at the repository root renders [`app::App`] with the `ssr` feature;
//! the WASM bundle built with `hydrate` calls [`hydrate`].

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
