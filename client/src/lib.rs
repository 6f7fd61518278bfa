//! # blog-client
//!
//! Leptos + WASM frontend for the blog: site header, login/register modal,
//! and role-guarded dashboards over a token-based auth API.
//!
//! The auth store lives in `state`, seeded from browser storage and settled
//! by one HTTP call per action. `components` and `pages` only read it and
//! dispatch actions.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
