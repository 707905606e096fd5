#![allow(warnings)]
//! Recipeats Frontend Entry Point

mod config;
mod error;
mod models;
mod fetch;
mod routes;
mod storage;
mod notify;
mod api;
mod session;
mod draft;
mod subsections;
mod submit;
mod store;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!(api = config::API_BASE_URL, "starting recipeats");
    mount_to_body(App);
}
