//! # referrals-client
//!
//! Leptos + WASM frontend for the referral portal: account login, signup,
//! and the referral-management page.
//!
//! Pages own route-level orchestration, `state` holds the typed UI models,
//! `net` describes the remote API and the transport that reaches it, and
//! `util` isolates browser storage. Browser-only code is gated behind the
//! `hydrate` feature so the crate also renders server-side.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
