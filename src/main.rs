//! Entry point for the WASM application

use leptos::*;
use site_rust::App;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Pro-Active Therapy - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
