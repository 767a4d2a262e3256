//! Browser side of the portfolio: nav bar plus four static pages, mounted to `<body>`.

pub mod app;
pub mod layout;
pub mod pages;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Route `log` records and panics to the browser console
fn init_console() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn hydrate() {
    init_console();
    log::info!("mounting portfolio app");
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
