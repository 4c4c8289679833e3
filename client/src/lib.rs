//! # mentutor-client
//!
//! Leptos + WASM frontend for the Mentutor mentoring platform.
//!
//! This crate contains pages, role-specific sidebars, the session context,
//! the REST client wrapper, and the declarative form validation tables. The
//! `mentutor` host crate renders it server-side (`ssr`); the browser bundle
//! hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
pub mod validation;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
