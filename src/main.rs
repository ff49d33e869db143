//! Dining Menu Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod filter;
mod menu_view;
mod models;
mod store;

#[cfg(test)]
mod test_support;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    mount_to_body(App);
}
