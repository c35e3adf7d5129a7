//! # client
//!
//! Leptos + WASM front-end for AcademiaSys, the academic project manager.
//!
//! This crate contains the login/registration pages, the protected project
//! views, routing, the bearer-authenticated REST client, and the browser
//! credential store. It renders on the server (`ssr`) and hydrates in the
//! browser (`hydrate`); the REST API itself is an external service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod paths;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
