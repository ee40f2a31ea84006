//! Todo List Frontend Entry Point

mod models;
mod edit;
mod storage;
mod static_list;
mod task_list;
mod config;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
