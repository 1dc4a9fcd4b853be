//! Taskboard Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod models;
mod mutation;
mod pages;
mod pagination;
mod query;
mod router;
mod session;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Logger first, so configuration errors are visible
    let config = AppConfig::from_build_env();
    if let Err(e) = console_logger::init(AppConfig::log_level_of(&config)) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
    let config = AppConfig::or_defaults(config);

    mount_to_body(move || view! { <App config /> });
}
