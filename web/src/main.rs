//! CineX - Crowdfunding for Creatives
//!
//! Leptos client-side app. All state lives in the browser; the wallet and the
//! transaction confirmation are simulated.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod state;
mod utils;

use app::App;
use shared::config::{init_config, SimulationConfig};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("CineX front-end starting");

    load_config();
    utils::dom::hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Install simulation settings baked in at build time.
///
/// The browser has no process environment, so overrides come from `option_env!`.
fn load_config() {
    let config = SimulationConfig::from_lookup(|key| {
        let value = match key {
            "CINEX_TX_DELAY_MS" => option_env!("CINEX_TX_DELAY_MS"),
            "CINEX_WALLET_ADDRESS" => option_env!("CINEX_WALLET_ADDRESS"),
            "CINEX_TX_FEE" => option_env!("CINEX_TX_FEE"),
            "CINEX_TX_ID" => option_env!("CINEX_TX_ID"),
            _ => None,
        };
        value.map(str::to_string)
    });

    match config.and_then(init_config) {
        Ok(()) => log::debug!("Simulation config installed"),
        Err(e) => log::error!("{}; using defaults", e),
    }
}
