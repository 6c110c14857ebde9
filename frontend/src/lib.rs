use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod macros;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod reducers;
pub mod state;
pub mod toast;
pub mod update;
pub mod utils;
pub mod views;

use crate::network::config::{self, ApiConfig};
use crate::pages::PageRegistry;
use crate::state::ListenerPolicy;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let document = dom_utils::document()?;

    // The bundle may be loaded with `defer`/`type=module` (DOM already parsed)
    // or from <head> (still parsing). Mount once the structure exists.
    if document.ready_state() == "loading" {
        let cb = Closure::once_into_js(move || {
            if let Err(e) = bootstrap() {
                web_sys::console::error_1(&e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())?;
        Ok(())
    } else {
        bootstrap()
    }
}

fn bootstrap() -> Result<(), JsValue> {
    let document: Document = dom_utils::document()?;
    debug_log!("Bootstrapping with API base '{}'", config::current().base_url());
    PageRegistry::standard().mount_all(&document);
    Ok(())
}

/// Point the client at a different backend origin at runtime.
#[wasm_bindgen]
pub fn init_api_config_js(base_url: &str) {
    config::set_api_config(ApiConfig::from_url(base_url));
}

/// Handle every book/cancel click instead of only the first one after each
/// render.
#[wasm_bindgen]
pub fn set_persistent_listeners_js(enabled: bool) {
    state::set_listener_policy(if enabled {
        ListenerPolicy::Persistent
    } else {
        ListenerPolicy::SingleUse
    });
}
