//! Touchstone file parser
//!
//! Composes the option line parser, the data line assembler, the port count
//! resolver and the sample decoder into a single document.

use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::{assemble_data_lines, collect_comments, TokenStream};
use super::decoder::{decode_samples, trailing_tokens, Sample};
use super::header::TouchstoneHeader;
use super::ports::{resolve_port_count, PortSource};
use crate::series::{SParamName, SParamSeries};

/// Touchstone parsing errors
#[derive(Error, Debug)]
pub enum TouchstoneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no option line (# ...) found")]
    MissingHeaderLine,

    #[error("option line has no frequency unit (GHZ/MHZ/KHZ/HZ)")]
    MissingFrequencyUnit,

    #[error("option line has no data format (DB/MA/RI)")]
    MissingFormat,

    #[error("option line has no reference impedance (R <value>)")]
    MissingReferenceImpedance,

    #[error("could not determine port count from file name or {token_count} data tokens")]
    PortCountUnresolved { token_count: usize },

    #[error("non-numeric data token: {token:?}")]
    MalformedNumericToken { token: String },

    #[error("{trailing} data tokens do not form a complete frequency record")]
    IncompleteSample { trailing: usize },
}

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Reject non-numeric data tokens and incomplete trailing records
    /// instead of dropping them.
    pub strict: bool,
}

impl ParseOptions {
    /// Options that reject malformed data
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// A parsed Touchstone document
#[derive(Debug, Clone)]
pub struct Touchstone {
    /// Option line settings
    pub header: TouchstoneHeader,
    /// Number of ports
    pub nports: usize,
    /// How `nports` was determined
    pub port_source: PortSource,
    /// Frequency records in file order
    pub samples: Vec<Sample>,
    /// Comments from the file
    pub comments: Vec<String>,
}

impl Touchstone {
    /// Parse a Touchstone file from disk.
    ///
    /// The file name is used as the port count hint.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TouchstoneError> {
        Self::from_file_with_options(path, &ParseOptions::default())
    }

    /// Parse a Touchstone file from disk with explicit options
    pub fn from_file_with_options<P: AsRef<Path>>(
        path: P,
        options: &ParseOptions,
    ) -> Result<Self, TouchstoneError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_bytes_with_options(&bytes, &filename, options)
    }

    /// Parse raw file bytes.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn from_bytes(bytes: &[u8], filename: &str) -> Result<Self, TouchstoneError> {
        Self::from_bytes_with_options(bytes, filename, &ParseOptions::default())
    }

    pub fn from_bytes_with_options(
        bytes: &[u8],
        filename: &str,
        options: &ParseOptions,
    ) -> Result<Self, TouchstoneError> {
        let text = String::from_utf8_lossy(bytes);
        Self::from_content_with_options(&text, filename, options)
    }

    /// Parse from string content
    ///
    /// # Arguments
    /// * `content` - Touchstone file content as string
    /// * `filename` - Original file name; an `.sNp` suffix fixes the port count
    ///
    /// # Example
    /// ```
    /// use tsplot_core::touchstone::Touchstone;
    /// let content = "# GHz S RI R 50\n1.0 0.3 0.4";
    /// let ts = Touchstone::from_content(content, "load.s1p").unwrap();
    /// assert_eq!(ts.nports, 1);
    /// ```
    pub fn from_content(content: &str, filename: &str) -> Result<Self, TouchstoneError> {
        Self::from_content_with_options(content, filename, &ParseOptions::default())
    }

    pub fn from_content_with_options(
        content: &str,
        filename: &str,
        options: &ParseOptions,
    ) -> Result<Self, TouchstoneError> {
        let lines: Vec<&str> = content.lines().collect();

        let header = TouchstoneHeader::from_lines(lines.iter().copied())?;
        let flat = assemble_data_lines(lines.iter().copied());
        let tokens = TokenStream::tokenize(&flat, options)?;

        let resolution = resolve_port_count(filename, tokens.len())?;
        let nports = resolution.nports;

        let trailing = trailing_tokens(nports, tokens.len());
        if trailing > 0 {
            if options.strict {
                return Err(TouchstoneError::IncompleteSample { trailing });
            }
            tracing::warn!(trailing, nports, "discarding incomplete trailing record");
        }

        let samples = decode_samples(&header, nports, tokens.values());

        tracing::debug!(
            filename,
            nports,
            port_source = %resolution.source,
            format = %header.format,
            unit = %header.frequency_unit,
            nfreq = samples.len(),
            "parsed touchstone document"
        );

        Ok(Self {
            header,
            nports,
            port_source: resolution.source,
            samples,
            comments: collect_comments(lines.iter().copied()),
        })
    }

    /// Get the number of frequency points
    pub fn nfreq(&self) -> usize {
        self.samples.len()
    }

    /// Frequency axis in Hz
    pub fn frequencies(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.frequency).collect()
    }

    /// S-parameter names in row-major order
    pub fn s_param_names(&self) -> Vec<SParamName> {
        SParamName::all(self.nports)
    }

    /// Magnitude series of one S-parameter (1-indexed ports)
    pub fn series_at(&self, name: SParamName) -> Option<SParamSeries> {
        if name.row == 0 || name.col == 0 || name.row > self.nports || name.col > self.nports {
            return None;
        }
        let format = self.header.format;
        let values = self
            .samples
            .iter()
            .map(|s| s.readings[[name.row - 1, name.col - 1]].magnitude(format))
            .collect();
        Some(SParamSeries::new(name.to_string(), self.frequencies(), values))
    }

    /// Magnitude series looked up by name, e.g. `"S21"`
    pub fn series_by_name(&self, name: &str) -> Option<SParamSeries> {
        name.parse::<SParamName>()
            .ok()
            .and_then(|n| self.series_at(n))
    }

    /// Magnitude series of every S-parameter in row-major order.
    ///
    /// All series share the same frequency axis.
    pub fn series(&self) -> Vec<SParamSeries> {
        let frequency = self.frequencies();
        let format = self.header.format;
        self.s_param_names()
            .into_iter()
            .map(|name| {
                let values = self
                    .samples
                    .iter()
                    .map(|s| s.readings[[name.row - 1, name.col - 1]].magnitude(format))
                    .collect();
                SParamSeries::new(name.to_string(), frequency.clone(), values)
            })
            .collect()
    }
}

/// Parse file bytes into one magnitude series per S-parameter.
///
/// Errors from any stage are returned unchanged; no partial result is
/// produced.
pub fn parse_touchstone(bytes: &[u8], filename: &str) -> Result<Vec<SParamSeries>, TouchstoneError> {
    Touchstone::from_bytes(bytes, filename).map(|ts| ts.series())
}
