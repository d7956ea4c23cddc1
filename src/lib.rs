//! LeadPilot - AI-powered lead generation landing site
//!
//! Server-rendered marketing pages with an interactive demo: a lead-intake
//! wizard, a canned-reply assistant and a mock lead finder, built with Leptos
//! and hydrated in the browser via WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
