//! Hackathon Site Entry Point

mod app;
mod components;
mod config;
mod content;
mod context;
mod icon_paths;
mod menu;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[APP] Mounting".into());
    mount_to_body(App);
}
