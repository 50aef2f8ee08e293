//! Battery Health Analyzer - Leptos frontend
//!
//! Browser surface for the shared UI state machine in `battery-core`.

pub mod analyzer;
pub mod api;
pub mod app;
pub mod components;

pub use app::App;

/// Entry point for a client-side rendered build
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    leptos::mount::mount_to_body(App);
}

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}
