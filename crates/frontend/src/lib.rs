//! Browser front end of the material return FMS (Leptos CSR).

pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Installs console logging and the panic hook, then mounts [`app::App`].
#[wasm_bindgen]
pub fn mount() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    // transport is fixed for the lifetime of the page
    _ = shared::backend::transport();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}
