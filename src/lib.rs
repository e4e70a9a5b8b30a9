//! Homepage Column Balancer WASM Module
//!
//! Grows the homepage column container so it reaches the bottom of its
//! tallest column. The measuring core in `layout` is DOM-independent; `dom`
//! and `api` adapt it to the live page.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod layout;

// Re-export commonly used types
pub use config::BalancerConfig;
pub use error::BalanceError;
pub use layout::{document_bottom_of, equalize_column_heights, plan, Equalization, HeightTarget, LayoutBox, Px};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    log::info!("Homepage column balancer WASM module initialized");
}
