//! Touchstone file parsing module
//!
//! Provides reading of Touchstone v1 (.snp) files into S-parameter series.

pub mod data;
pub mod decoder;
pub mod header;
pub mod parser;
pub mod ports;

pub use decoder::{Reading, Sample};
pub use header::{SParamFormat, TouchstoneHeader};
pub use parser::{parse_touchstone, ParseOptions, Touchstone, TouchstoneError};
pub use ports::PortSource;
