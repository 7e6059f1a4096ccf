//! WASM bindings for tsplot-core
//!
//! This module exposes Touchstone parsing and the signal pipeline to the
//! JavaScript viewer. File reading happens on the JS side; the bytes or text
//! are passed in together with the original file name.

use wasm_bindgen::prelude::*;

mod session;
mod signal;
mod touchstone;

pub use session::{WasmProcessParams, WasmTraceSession};
pub use signal::WasmSpectrum;
pub use touchstone::{WasmSeries, WasmTouchstone};

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a core error into a JS exception value
pub(crate) fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}
