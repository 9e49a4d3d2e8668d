pub mod app;
pub mod demo;
pub mod landing;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
    log::info!("Cardápio Digital - Site carregado com sucesso!");
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
