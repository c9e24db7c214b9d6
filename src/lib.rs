//! # clarity-board
//!
//! Leptos + WASM frontend for Clarity Board, a single-user task board of
//! sticky notes with deadlines.
//!
//! The browser-independent behavior (task model, urgency marking, ordering,
//! drag targeting, the controller hooks) lives in the `board` crate. This
//! crate binds it to the page: REST calls through `gloo-net`, settings in
//! `localStorage`, and a reactive view the controller renders into.
//!
//! Browser-only code is gated behind the `csr` feature; without it the crate
//! builds natively so component helpers and state can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let config = util::page_config::read();
    if let Some(level) = config.log_level.to_level() {
        let _ = console_log::init_with_level(level);
    }
    log::info!("clarity-board starting against {:?}", config.api_base);
    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone()/> });
}
