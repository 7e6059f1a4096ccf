//! Display process pipeline
//!
//! Chains moving average, log transform and a DFT/IDFT stage over a trace,
//! the way the viewer prepares its transformed plots. Every stage is a pure
//! function; changing a parameter only requires re-running the pipeline, not
//! re-parsing the file.

use std::fmt;

use super::cepstrum::{log_transform, LogType};
use super::dft::{dft_abs, idft_real};
use super::moving_average::moving_average;
use crate::constants::DEFAULT_MA_WINDOW;
use crate::series::SParamSeries;

/// Which transform a trace is shown under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProcessMode {
    /// Unprocessed magnitude trace
    #[default]
    Raw,
    /// Amplitude spectrum `|DFT|`
    Dft,
    /// Inverse DFT of the trace taken as a real spectrum
    Idft,
}

impl ProcessMode {
    /// Suffix appended to trace names, e.g. `S21 (DFT)`
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            ProcessMode::Raw => None,
            ProcessMode::Dft => Some("DFT"),
            ProcessMode::Idft => Some("IDFT"),
        }
    }
}

impl fmt::Display for ProcessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix().unwrap_or("Raw"))
    }
}

/// Preprocessing applied before the DFT/IDFT stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessParams {
    /// Smooth the trace first
    pub ma_enabled: bool,
    /// Moving-average window; ignored unless greater than 1
    pub ma_window: usize,
    /// Logarithm applied after smoothing
    pub log_type: LogType,
    /// Keep only the first half of the transformed trace
    pub show_half: bool,
}

impl Default for ProcessParams {
    fn default() -> Self {
        Self {
            ma_enabled: false,
            ma_window: DEFAULT_MA_WINDOW,
            log_type: LogType::None,
            show_half: true,
        }
    }
}

/// Moving-average overlay drawn on top of any plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PostProcess {
    pub show_ma: bool,
    pub ma_window: usize,
}

impl Default for PostProcess {
    fn default() -> Self {
        Self {
            show_ma: false,
            ma_window: DEFAULT_MA_WINDOW,
        }
    }
}

/// One step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    MovingAverage(usize),
    Log(LogType),
    DftAbs,
    IdftReal,
}

impl Stage {
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        match *self {
            Stage::MovingAverage(w) => moving_average(values, w),
            Stage::Log(t) => log_transform(values, t),
            Stage::DftAbs => dft_abs(values),
            Stage::IdftReal => idft_real(values),
        }
    }
}

impl ProcessParams {
    /// Stages run for `mode`, in order
    pub fn stages(&self, mode: ProcessMode) -> Vec<Stage> {
        let transform = match mode {
            ProcessMode::Raw => return Vec::new(),
            ProcessMode::Dft => Stage::DftAbs,
            ProcessMode::Idft => Stage::IdftReal,
        };

        let mut stages = Vec::with_capacity(3);
        if self.ma_enabled && self.ma_window > 1 {
            stages.push(Stage::MovingAverage(self.ma_window));
        }
        stages.push(Stage::Log(self.log_type));
        stages.push(transform);
        stages
    }
}

/// Run `values` through `stages`
pub fn run_stages(values: &[f64], stages: &[Stage]) -> Vec<f64> {
    stages.iter().fold(values.to_vec(), |acc, stage| {
        tracing::trace!(?stage, len = acc.len(), "applying stage");
        stage.apply(&acc)
    })
}

/// Process one trace for display under `mode`.
///
/// The result keeps the trace's frequency axis and is renamed with the mode
/// suffix. With `show_half`, both axes are cut to `floor(len / 2)`.
pub fn process_series(
    series: &SParamSeries,
    mode: ProcessMode,
    params: &ProcessParams,
) -> SParamSeries {
    let Some(suffix) = mode.suffix() else {
        return series.clone();
    };

    let values = run_stages(series.values(), &params.stages(mode));
    let mut out = series.with_values(format!("{} ({})", series.name(), suffix), values);
    if params.show_half {
        out.truncate(out.len() / 2);
    }
    out
}

/// Process every trace
pub fn process_all(
    traces: &[SParamSeries],
    mode: ProcessMode,
    params: &ProcessParams,
) -> Vec<SParamSeries> {
    traces
        .iter()
        .map(|t| process_series(t, mode, params))
        .collect()
}

/// Append a `"<name> (MA)"` smoothed copy of each trace when enabled.
///
/// Returns the input traces unchanged otherwise.
pub fn with_moving_average(traces: &[SParamSeries], post: &PostProcess) -> Vec<SParamSeries> {
    let mut out = traces.to_vec();
    if post.show_ma && post.ma_window > 0 {
        out.extend(traces.iter().map(|t| {
            t.with_values(
                format!("{} (MA)", t.name()),
                moving_average(t.values(), post.ma_window),
            )
        }));
    }
    out
}
