//! # taskdeck
//!
//! Leptos + WASM frontend for the Taskdeck task tracker.
//!
//! The interesting part of this crate is the session core: the auth state
//! machine in `state`, the session API client in `net`, the credential store
//! in `util`, and the route guards in `components`. Pages are thin shells
//! over that core.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
