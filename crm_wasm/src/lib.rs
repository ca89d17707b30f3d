//! This file provides the entry point and setup for running the form dispatcher in the browser.

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// The entry point of the WASM module.
///
/// Binds the form actions once the document finished loading, immediately if it already has.
///
/// # Errors
///
/// Returns an error if there is no window or document to bind to.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    browser::on_ready(browser::initialize)
}
