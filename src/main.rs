//! Todos Frontend Entry Point

mod app;
mod components;
mod config;
mod models;
mod store;
mod todos;

use app::App;
use config::AppConfig;
use console_logger::ConsoleLogger;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    if let Err(e) = ConsoleLogger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    log::info!("[APP] Starting with {:?}", config);
    mount_to_body(move || view! { <App config=config /> });
}
