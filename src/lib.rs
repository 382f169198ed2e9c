pub mod api;
pub mod common;
pub mod config;
pub mod frontend;
pub mod models;
pub mod services;
pub mod types;

/// WASM entry point: mounts the client-rendered app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(frontend::App);
}
