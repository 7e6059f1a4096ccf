//! WASM bindings for Touchstone documents

use js_sys::{Array, Float64Array};
use tsplot_core::touchstone::Touchstone;
use tsplot_core::SParamSeries;
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// A named (frequency, value) trace for WASM
#[wasm_bindgen]
pub struct WasmSeries {
    inner: SParamSeries,
}

#[wasm_bindgen]
impl WasmSeries {
    /// Trace name, e.g. "S21" or "S21 (DFT)"
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Frequency axis in Hz
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> Float64Array {
        Float64Array::from(self.inner.frequency())
    }

    /// Trace values
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> Float64Array {
        Float64Array::from(self.inner.values())
    }

    /// Number of points
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }
}

impl WasmSeries {
    /// Get the inner series reference
    pub fn inner(&self) -> &SParamSeries {
        &self.inner
    }
}

impl From<SParamSeries> for WasmSeries {
    fn from(inner: SParamSeries) -> Self {
        Self { inner }
    }
}

/// Convert series into a JS array of `WasmSeries`
pub(crate) fn series_array(series: Vec<SParamSeries>) -> Array {
    series
        .into_iter()
        .map(|s| JsValue::from(WasmSeries::from(s)))
        .collect()
}

/// Parsed Touchstone file for WASM
#[wasm_bindgen]
pub struct WasmTouchstone {
    inner: Touchstone,
}

#[wasm_bindgen]
impl WasmTouchstone {
    /// Parse Touchstone file content
    ///
    /// @param content - The Touchstone file content as string
    /// @param filename - Original filename; an .sNp suffix fixes the port count
    #[wasm_bindgen(js_name = fromContent)]
    pub fn from_content(content: &str, filename: &str) -> Result<WasmTouchstone, JsValue> {
        let inner = Touchstone::from_content(content, filename).map_err(to_js_error)?;
        Ok(WasmTouchstone { inner })
    }

    /// Parse raw file bytes
    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(bytes: &[u8], filename: &str) -> Result<WasmTouchstone, JsValue> {
        let inner = Touchstone::from_bytes(bytes, filename).map_err(to_js_error)?;
        Ok(WasmTouchstone { inner })
    }

    /// Number of ports
    #[wasm_bindgen(getter)]
    pub fn nports(&self) -> usize {
        self.inner.nports
    }

    /// Number of frequency points
    #[wasm_bindgen(getter)]
    pub fn nfreq(&self) -> usize {
        self.inner.nfreq()
    }

    /// Declared frequency unit ("Hz", "kHz", "MHz", "GHz")
    #[wasm_bindgen(getter, js_name = freqUnit)]
    pub fn freq_unit(&self) -> String {
        self.inner.header.frequency_unit.to_string()
    }

    /// Declared data format ("DB", "MA", "RI")
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.inner.header.format.to_string()
    }

    /// Reference impedance in ohms
    #[wasm_bindgen(getter)]
    pub fn z0(&self) -> f64 {
        self.inner.header.reference_impedance
    }

    /// Frequency axis in Hz
    #[wasm_bindgen(getter)]
    pub fn f(&self) -> Float64Array {
        Float64Array::from(self.inner.frequencies().as_slice())
    }

    /// S-parameter names in row-major order
    #[wasm_bindgen(js_name = sParams)]
    pub fn s_params(&self) -> Array {
        self.inner
            .s_param_names()
            .iter()
            .map(|n| JsValue::from_str(&n.to_string()))
            .collect()
    }

    /// All magnitude traces as an array of WasmSeries
    pub fn series(&self) -> Array {
        series_array(self.inner.series())
    }

    /// One magnitude trace by name, e.g. "S21"
    #[wasm_bindgen(js_name = seriesByName)]
    pub fn series_by_name(&self, name: &str) -> Result<WasmSeries, JsValue> {
        self.inner
            .series_by_name(name)
            .map(WasmSeries::from)
            .ok_or_else(|| JsValue::from_str(&format!("No such S-parameter: {}", name)))
    }
}

impl WasmTouchstone {
    /// Get the inner document reference
    pub fn inner(&self) -> &Touchstone {
        &self.inner
    }
}
