//! Storefront client crate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-side (WASM) storefront frontend. `app` wires routing and shared
//! context; `pages` own route-scoped orchestration; `net`, `state`, `util`,
//! and `components` keep networking, shared state, browser glue, and
//! rendering concerns separated.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
