//! Pixplorer - marketing site for an AI art studio
//!
//! A single landing page rendered on the server and hydrated in the browser,
//! built with Leptos. All interactive state (disclosure panels, the hero
//! artwork cursor, form buffers and their feedback timers, decorative
//! particles) is ephemeral and lives only as long as the page.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
