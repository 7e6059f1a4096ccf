//! WASM bindings for trace session state

use js_sys::Array;
use tsplot_core::signal::{with_moving_average, LogType, PostProcess, ProcessMode, ProcessParams};
use tsplot_core::TraceSession;
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::touchstone::series_array;

/// DFT/IDFT preprocessing parameters for WASM
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmProcessParams {
    inner: ProcessParams,
}

#[wasm_bindgen]
impl WasmProcessParams {
    /// Create parameters with defaults (no smoothing, no log, first half only)
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmProcessParams {
        Self::default()
    }

    #[wasm_bindgen(getter, js_name = maEnabled)]
    pub fn ma_enabled(&self) -> bool {
        self.inner.ma_enabled
    }

    #[wasm_bindgen(setter, js_name = maEnabled)]
    pub fn set_ma_enabled(&mut self, v: bool) {
        self.inner.ma_enabled = v;
    }

    #[wasm_bindgen(getter, js_name = maWindow)]
    pub fn ma_window(&self) -> usize {
        self.inner.ma_window
    }

    #[wasm_bindgen(setter, js_name = maWindow)]
    pub fn set_ma_window(&mut self, v: usize) {
        self.inner.ma_window = v;
    }

    #[wasm_bindgen(getter, js_name = logType)]
    pub fn log_type(&self) -> String {
        self.inner.log_type.to_string()
    }

    /// @param v - "log", "log10", "log2" or "none"
    #[wasm_bindgen(js_name = setLogType)]
    pub fn set_log_type(&mut self, v: &str) -> Result<(), JsValue> {
        self.inner.log_type = v.parse::<LogType>().map_err(to_js_error)?;
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = showHalf)]
    pub fn show_half(&self) -> bool {
        self.inner.show_half
    }

    #[wasm_bindgen(setter, js_name = showHalf)]
    pub fn set_show_half(&mut self, v: bool) {
        self.inner.show_half = v;
    }
}

fn parse_mode(mode: &str) -> Result<ProcessMode, JsValue> {
    match mode.to_lowercase().as_str() {
        "raw" => Ok(ProcessMode::Raw),
        "dft" => Ok(ProcessMode::Dft),
        "idft" => Ok(ProcessMode::Idft),
        m => Err(JsValue::from_str(&format!(
            "Invalid mode: {}. Use 'raw', 'dft' or 'idft'",
            m
        ))),
    }
}

/// Loaded traces and S-parameter selection for WASM
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmTraceSession {
    inner: TraceSession,
}

#[wasm_bindgen]
impl WasmTraceSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTraceSession {
        Self::default()
    }

    /// Parse a file and replace the current traces
    ///
    /// On error the previous traces are kept and the message is thrown.
    pub fn load(&mut self, bytes: &[u8], filename: &str) -> Result<(), JsValue> {
        self.inner.load(bytes, filename).map_err(to_js_error)?;
        Ok(())
    }

    /// Names of all loaded traces
    #[wasm_bindgen(js_name = sParams)]
    pub fn s_params(&self) -> Array {
        self.inner
            .s_params()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// Selected names
    pub fn selected(&self) -> Array {
        self.inner
            .selected()
            .iter()
            .map(|s| JsValue::from_str(s))
            .collect()
    }

    pub fn toggle(&mut self, name: &str) -> bool {
        self.inner.toggle(name)
    }

    #[wasm_bindgen(js_name = selectAll)]
    pub fn select_all(&mut self) {
        self.inner.select_all();
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.inner.clear_selection();
    }

    /// Selected traces processed under `mode`
    ///
    /// @param mode - "raw", "dft" or "idft"
    /// @param params - Preprocessing parameters
    /// @param ma_overlay - Moving-average window for an extra "(MA)" trace per
    ///   result; 0 disables the overlay
    pub fn processed(
        &self,
        mode: &str,
        params: &WasmProcessParams,
        ma_overlay: usize,
    ) -> Result<Array, JsValue> {
        let mode = parse_mode(mode)?;
        let traces = self.inner.processed(mode, &params.inner);
        let post = PostProcess {
            show_ma: ma_overlay > 0,
            ma_window: ma_overlay,
        };
        Ok(series_array(with_moving_average(&traces, &post)))
    }
}
