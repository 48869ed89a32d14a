#![allow(warnings)]
//! Checklist Tree Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod state;

use app::App;
use checklist_tree::ChecklistConfig;
use leptos::prelude::*;

/// Runtime config, embedded at build time
const CONFIG_JSON: &str = include_str!("../checklist.json");

fn load_config() -> ChecklistConfig {
    ChecklistConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[APP] {}, using defaults", e).into());
        ChecklistConfig::default()
    })
}

fn main() {
    console_error_panic_hook::set_once();

    let config = load_config();
    if let Err(e) = logging::init_logger(config.level_filter()) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
