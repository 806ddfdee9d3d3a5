//! # recipe-client
//!
//! Leptos + WASM front end for the recipe application's Sign-In screen.
//!
//! This crate contains the app shell, the Sign-In page, its decorative
//! components, the form state, and the notification presenter. Browser-only
//! code sits behind the `hydrate` feature so the form logic tests natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered Sign-In screen.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
