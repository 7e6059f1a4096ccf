//! Numerical constants for parsing and signal processing
//!
//! Provides the limits and tolerance values shared by the Touchstone parser
//! and the signal pipeline.

/// Largest port count considered when inferring the port count from the
/// length of the numeric token stream.
pub const MAX_INFERRED_PORTS: usize = 10;

/// Floor added to magnitudes before taking a logarithm.
/// Keeps `log(|v| + LOG_FLOOR)` finite when `v` is zero.
pub const LOG_FLOOR: f64 = 1e-12;

/// Default moving-average window used by the process pipeline.
pub const DEFAULT_MA_WINDOW: usize = 50;
