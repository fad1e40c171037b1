// lib.rs - Root module for the bookshelf library
//
// The whole Leptos application lives in `web_app`. The server binary
// (src/bin/main.rs) renders it and the WASM bundle hydrates it in the browser.

pub mod web_app;

/// WASM entry point: hydrates the server-rendered body
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
