pub mod api;
pub mod app;
pub mod backend;
pub mod cache;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod moderation;
pub mod pages;
pub mod routes;
pub mod session;
pub mod toast;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
