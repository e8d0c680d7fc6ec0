//! # postwall
//!
//! Leptos + WASM client for a small social feed: posts, likes, comments,
//! and JWT-based login/registration against a single GraphQL endpoint.
//!
//! This crate contains pages, components, session/auth state, the typed form
//! hook, and the GraphQL client with its normalized cache. Browser-only code
//! sits behind the `csr` feature so the logic builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
