//! Caller-owned trace state
//!
//! Holds the traces of the currently loaded file and the S-parameters the
//! user has selected for display. The session is plain state owned by its
//! caller; parsing and processing stay pure functions of their inputs.

use crate::series::SParamSeries;
use crate::signal::pipeline::{process_all, ProcessMode, ProcessParams};
use crate::touchstone::{ParseOptions, Touchstone, TouchstoneError};

/// Traces of the loaded file plus the current selection
#[derive(Debug, Clone, Default)]
pub struct TraceSession {
    options: ParseOptions,
    source: Option<String>,
    traces: Vec<SParamSeries>,
    selected: Vec<String>,
}

impl TraceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose loads use `options`
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parse `bytes` and replace the current traces.
    ///
    /// On error the previous traces and selection are kept. On success the
    /// selection is narrowed to names that exist in the new file.
    pub fn load(
        &mut self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<&[SParamSeries], TouchstoneError> {
        let ts = Touchstone::from_bytes_with_options(bytes, filename, &self.options)?;
        self.replace(ts.series(), filename);
        Ok(&self.traces)
    }

    /// Replace the traces with an already parsed document
    pub fn load_document(&mut self, ts: &Touchstone, filename: &str) -> &[SParamSeries] {
        self.replace(ts.series(), filename);
        &self.traces
    }

    fn replace(&mut self, traces: Vec<SParamSeries>, filename: &str) {
        self.traces = traces;
        self.source = Some(filename.to_string());
        let traces = &self.traces;
        self.selected.retain(|name| traces.iter().any(|t| t.name() == name));
        tracing::debug!(
            filename,
            ntraces = self.traces.len(),
            nselected = self.selected.len(),
            "loaded traces"
        );
    }

    /// File name of the loaded traces
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// All traces of the loaded file
    pub fn traces(&self) -> &[SParamSeries] {
        &self.traces
    }

    /// Names of all traces in file order
    pub fn s_params(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.name()).collect()
    }

    /// Selected names in selection order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    /// Add `name` to the selection. Returns false for unknown or already
    /// selected names.
    pub fn select(&mut self, name: &str) -> bool {
        if self.is_selected(name) || !self.traces.iter().any(|t| t.name() == name) {
            return false;
        }
        self.selected.push(name.to_string());
        true
    }

    /// Remove `name` from the selection. Returns whether it was selected.
    pub fn deselect(&mut self, name: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != name);
        self.selected.len() != before
    }

    /// Flip the selection state of `name`. Returns the new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.deselect(name) {
            false
        } else {
            self.select(name)
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.traces.iter().map(|t| t.name().to_string()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selected traces, in file order
    pub fn selected_traces(&self) -> Vec<&SParamSeries> {
        self.traces
            .iter()
            .filter(|t| self.is_selected(t.name()))
            .collect()
    }

    /// Selected traces processed for display under `mode`
    pub fn processed(&self, mode: ProcessMode, params: &ProcessParams) -> Vec<SParamSeries> {
        let selected: Vec<SParamSeries> = self.selected_traces().into_iter().cloned().collect();
        process_all(&selected, mode, params)
    }
}
