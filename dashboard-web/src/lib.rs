//! InfraMind Dashboard - Leptos Frontend
//!
//! Single-page dashboard over the InfraMind backend microservices (auth,
//! cloud integrations, cost/security/ML/SRE agents). All business logic is
//! server-side; this app authenticates, calls REST endpoints, and renders.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("InfraMind dashboard starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen baked into index.html once WASM is live.
fn hide_loading_screen() {
    let document = gloo_utils::document();
    if let Some(loading) = document.get_element_by_id("app-loading") {
        if let Some(element) = loading.dyn_ref::<HtmlElement>() {
            element.class_list().add_1("hidden").ok();
        }
        loading.set_attribute("style", "display: none;").ok();
    }
}
