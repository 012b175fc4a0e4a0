//! # client
//!
//! Leptos front end for SiteDeck: the project dashboard, the records
//! workspace (bids, deliveries, stages, estimates) and the product tour
//! library.
//!
//! Slide navigation rules live in the `carousel` crate and record filtering,
//! sorting and editing in the `records` crate. This crate wires them to
//! signals, routes and browser events.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod tours;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
