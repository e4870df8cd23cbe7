#![allow(warnings)]
//! Crowdfund Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod router;
mod store;
mod views;

#[cfg(test)]
mod test_support;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init_logger(config.log_level) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }
    tracing::info!(api = %config.api_base_url, "starting crowdfund frontend");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
