//! # cineverse
//!
//! Leptos + WASM frontend for the CineVerse movie-discovery dashboard.
//!
//! The app authenticates against a remote auth service, fetches movie data
//! from a remote movie service, and renders dashboard, search, and detail
//! views. Protected routes sit behind the session gate in `state::session`;
//! detail views assemble themselves with the partial-failure fan-in fetch in
//! `net::fetch`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
