//! # tutoring-client
//!
//! Leptos + WASM login client for the tutoring platform.
//!
//! This crate contains the login page, its form state machine, the GraphQL
//! login transport, and the session storage the resulting token is written
//! to. Browser-only code sits behind the `csr` feature so the state machine
//! and submit pipeline build and test natively.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("tutoring client starting");
    leptos::mount::mount_to_body(app::App);
}
