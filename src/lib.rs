//! Browser client for the AASTU document archive.
//!
//! ARCHITECTURE
//! ============
//! - `state`: session model, durable storage and the reactive auth context.
//! - `util`: route-guard decisions plus small browser helpers.
//! - `net`: REST client and wire types for the archive backend.
//! - `components` / `pages`: Leptos views.
//! - `app`: contexts and the role-guarded route table.
//!
//! Browser-only code sits behind the `hydrate` feature with native
//! fallbacks, so the logic modules test with a plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = config::ClientConfig::from_build_env().log_level;
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
