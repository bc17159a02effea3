pub mod analytics;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod http;
pub mod lazy_image;
pub mod stats;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(e) = config::RelayConfig::from_build_env() {
        log::warn!("contact form disabled: {e}");
    }
    leptos::mount::hydrate_body(App);
}
