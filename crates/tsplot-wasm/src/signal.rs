//! WASM bindings for the signal pipeline

use js_sys::Float64Array;
use tsplot_core::signal::{self, LogType, Spectrum};
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// Real/imaginary DFT output for WASM
#[wasm_bindgen]
pub struct WasmSpectrum {
    inner: Spectrum,
}

#[wasm_bindgen]
impl WasmSpectrum {
    /// Real parts
    #[wasm_bindgen(getter)]
    pub fn re(&self) -> Float64Array {
        Float64Array::from(self.inner.re.as_slice())
    }

    /// Imaginary parts
    #[wasm_bindgen(getter)]
    pub fn im(&self) -> Float64Array {
        Float64Array::from(self.inner.im.as_slice())
    }

    /// Bin magnitudes
    pub fn magnitude(&self) -> Float64Array {
        Float64Array::from(self.inner.magnitude().as_slice())
    }
}

fn parse_log_type(log_type: &str) -> Result<LogType, JsValue> {
    log_type.parse::<LogType>().map_err(to_js_error)
}

/// Centered moving average
#[wasm_bindgen(js_name = movingAverage)]
pub fn moving_average(values: &[f64], window: usize) -> Float64Array {
    Float64Array::from(signal::moving_average(values, window).as_slice())
}

/// Direct O(N²) DFT
#[wasm_bindgen]
pub fn dft(values: &[f64]) -> WasmSpectrum {
    WasmSpectrum {
        inner: signal::dft(values),
    }
}

/// Inverse DFT returning the real part
#[wasm_bindgen]
pub fn idft(re: &[f64], im: &[f64]) -> Float64Array {
    Float64Array::from(signal::idft(re, im).as_slice())
}

/// Amplitude spectrum |DFT|
#[wasm_bindgen(js_name = dftAbs)]
pub fn dft_abs(values: &[f64]) -> Float64Array {
    Float64Array::from(signal::dft_abs(values).as_slice())
}

/// Elementwise log transform
///
/// @param logType - "log", "log10", "log2" or "none"
#[wasm_bindgen(js_name = logTransform)]
pub fn log_transform(values: &[f64], log_type: &str) -> Result<Float64Array, JsValue> {
    let t = parse_log_type(log_type)?;
    Ok(Float64Array::from(signal::log_transform(values, t).as_slice()))
}

/// Cepstrum of a trace
///
/// @param logType - "log", "log10", "log2" or "none"
#[wasm_bindgen]
pub fn cepstrum(values: &[f64], log_type: &str) -> Result<Float64Array, JsValue> {
    let t = parse_log_type(log_type)?;
    Ok(Float64Array::from(signal::cepstrum(values, t).as_slice()))
}
