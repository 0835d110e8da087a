//! # crowdfund-client
//!
//! Leptos + WASM frontend for the crowdfunding platform. Replaces the
//! React + Material UI single-page client with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the REST
//! API client, and small browser utilities. All business logic lives in
//! the HTTP API this client talks to; the crate is view glue over four
//! REST calls (list campaigns, create campaign, register, login).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(|| view! { <crate::app::App/> });
}
