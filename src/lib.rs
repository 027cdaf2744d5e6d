//! # sentinel-ui
//!
//! Leptos + WASM frontend for the sensor monitoring console. Handles login
//! and session establishment against the Flask backend, role-based route
//! gating, and the shared realtime channel for server-pushed events.
//!
//! This crate contains pages, components, application state, and the network
//! layer (HTTP auth calls plus the WebSocket channel manager). Presentation
//! is deliberately thin; the design weight is in `net` and `state`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Client-side entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
