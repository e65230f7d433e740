use web_sys::console;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting password reset frontend (wasm)");

    // window.__PASSRESET_ENV wins over ./config.json when present.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
