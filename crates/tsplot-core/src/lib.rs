//! tsplot-core: Touchstone parsing and signal pipeline
//!
//! Loads network-analyzer measurement files (Touchstone `.sNp`) into
//! per-S-parameter magnitude series and provides the transforms used to
//! inspect them.
//!
//! ## Modules
//!
//! - `frequency` - Frequency units
//! - `touchstone` - Touchstone file parsing
//! - `series` - Named (frequency, value) series
//! - `signal` - Moving average, DFT/IDFT, cepstrum and the display pipeline
//! - `session` - Caller-owned trace and selection state
//!
//! ## Example
//!
//! ```
//! use tsplot_core::{parse_touchstone, signal};
//!
//! let content = b"# GHZ DB R 50\n1.0 -3.0 0.0 0.0 -3.0\n2.0 -6.0 0.0 0.0 -6.0\n";
//! let series = parse_touchstone(content, "test.s2p").unwrap();
//! assert_eq!(series.len(), 4);
//!
//! let spectrum = signal::dft(series[0].values());
//! let back = signal::idft(&spectrum.re, &spectrum.im);
//! assert_eq!(back.len(), 2);
//! ```

pub mod constants;
pub mod frequency;
pub mod series;
pub mod session;
pub mod signal;
pub mod touchstone;

pub use frequency::FrequencyUnit;
pub use series::{SParamName, SParamSeries, SeriesLengthMismatch};
pub use session::TraceSession;
pub use touchstone::{parse_touchstone, ParseOptions, Touchstone, TouchstoneError};
