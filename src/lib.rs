//! Pro-Active Therapy - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend rendering the marketing site for the
//! Pro-Active Therapy physiotherapy clinic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (page metadata + router)                                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  └── Hero (logo, headline, CTAs, trust signals, media)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Site configuration and business contact info
//! - [`components`] - UI components (Hero)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", config::APP_NAME);

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} — {}", config::APP_NAME, HERO_CONTENT.tagline)/>
        <Meta name="description" content=config::PAGE_DESCRIPTION/>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
        </div>
    }
}
