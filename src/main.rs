//! Todo List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod domain;
mod edit_session;
mod repository;
mod state;
mod transfer;
mod view_model;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_logger::init().is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    mount_to_body(App);
}
