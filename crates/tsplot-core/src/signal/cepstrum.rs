//! Log transforms and cepstrum
//!
//! All transforms use the direct DFT from [`super::dft`].

use std::fmt;
use std::str::FromStr;

use super::dft::{dft, dft_abs, idft, idft_spectrum};
use crate::constants::LOG_FLOOR;

/// Elementwise logarithm applied before a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogType {
    /// Natural logarithm
    Ln,
    Log10,
    Log2,
    /// No logarithm
    #[default]
    None,
}

impl LogType {
    /// Apply to a single value.
    ///
    /// The logarithms operate on `|v| + LOG_FLOOR`; `None` returns `v`
    /// unchanged.
    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            LogType::Ln => (v.abs() + LOG_FLOOR).ln(),
            LogType::Log10 => (v.abs() + LOG_FLOOR).log10(),
            LogType::Log2 => (v.abs() + LOG_FLOOR).log2(),
            LogType::None => v,
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogType::Ln => "log",
            LogType::Log10 => "log10",
            LogType::Log2 => "log2",
            LogType::None => "none",
        };
        f.write_str(label)
    }
}

/// Error returned for an unknown log type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log type: {0} (expected log, log10, log2 or none)")]
pub struct UnknownLogType(pub String);

impl FromStr for LogType {
    type Err = UnknownLogType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" | "ln" => Ok(LogType::Ln),
            "log10" => Ok(LogType::Log10),
            "log2" => Ok(LogType::Log2),
            "none" => Ok(LogType::None),
            _ => Err(UnknownLogType(s.to_string())),
        }
    }
}

/// Apply `log_type` to every element
pub fn log_transform(values: &[f64], log_type: LogType) -> Vec<f64> {
    match log_type {
        LogType::None => values.to_vec(),
        _ => values.iter().map(|&v| log_type.apply(v)).collect(),
    }
}

/// Log-magnitude spectrum: `log(|DFT(x)| + ε)`
pub fn log_spectrum(values: &[f64], log_type: LogType) -> Vec<f64> {
    log_transform(&dft_abs(values), log_type)
}

/// Cepstrum of `values`.
///
/// The magnitude spectrum is log-transformed, then taken through a forward
/// and an inverse DFT; the real output is returned. With `LogType::None` the
/// magnitude spectrum passes unmodified.
pub fn cepstrum(values: &[f64], log_type: LogType) -> Vec<f64> {
    let transformed = log_spectrum(values, log_type);
    idft_spectrum(&dft(&transformed))
}

/// Real cepstrum: inverse DFT of the log-magnitude spectrum taken as a
/// purely real spectrum.
pub fn real_cepstrum(values: &[f64], log_type: LogType) -> Vec<f64> {
    idft(&log_spectrum(values, log_type), &[])
}
