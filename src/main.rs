//! Moodboard Frontend Entry Point

mod config;
mod page_data;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match page_data::load_config() {
        Ok(config) => (config, None),
        Err(e) => (config::BoardConfig::default(), Some(e)),
    };

    if let Err(e) = rolling_logger::init_logger("moodboard", config.logger_config()) {
        web_sys::console::warn_1(&format!("[MAIN] {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[MAIN] Ignoring window.{}: {}", page_data::CONFIG_GLOBAL, e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
