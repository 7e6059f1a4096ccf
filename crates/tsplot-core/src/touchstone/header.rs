//! Option line parsing
//!
//! Extracts the frequency unit, data format and reference impedance from the
//! `#` option line, e.g. `# GHz S DB R 50`.

use num_complex::Complex64;
use std::fmt;

use super::parser::TouchstoneError;
use crate::frequency::FrequencyUnit;

/// S-parameter data format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SParamFormat {
    DB, // dB-Angle (degrees)
    MA, // Magnitude-Angle (degrees)
    RI, // Real-Imaginary
}

impl SParamFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DB" => Some(SParamFormat::DB),
            "MA" => Some(SParamFormat::MA),
            "RI" => Some(SParamFormat::RI),
            _ => None,
        }
    }

    /// Linear magnitude of a `(c1, c2)` pair in this format.
    ///
    /// MA passes `c1` through unchanged; the phase column is ignored.
    pub fn magnitude(&self, c1: f64, c2: f64) -> f64 {
        match self {
            SParamFormat::DB => 10.0_f64.powf(c1 / 20.0),
            SParamFormat::MA => c1,
            SParamFormat::RI => (c1 * c1 + c2 * c2).sqrt(),
        }
    }

    /// Complex value of a `(c1, c2)` pair in this format.
    pub fn to_complex(&self, c1: f64, c2: f64) -> Complex64 {
        match self {
            SParamFormat::RI => Complex64::new(c1, c2),
            SParamFormat::MA => Complex64::from_polar(c1, c2.to_radians()),
            SParamFormat::DB => Complex64::from_polar(10.0_f64.powf(c1 / 20.0), c2.to_radians()),
        }
    }
}

impl fmt::Display for SParamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SParamFormat::DB => "DB",
            SParamFormat::MA => "MA",
            SParamFormat::RI => "RI",
        };
        f.write_str(label)
    }
}

/// Settings declared on the option line
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchstoneHeader {
    /// Unit of the frequency column
    pub frequency_unit: FrequencyUnit,
    /// Data format of each parameter pair
    pub format: SParamFormat,
    /// Reference impedance in ohms
    pub reference_impedance: f64,
}

impl TouchstoneHeader {
    /// Find and parse the first option line.
    ///
    /// Lines before it are passed over; later `#` lines are ignored.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, TouchstoneError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .map(str::trim)
            .find(|l| l.starts_with('#'))
            .ok_or(TouchstoneError::MissingHeaderLine)
            .and_then(Self::parse_option_line)
    }

    /// Parse the option line (# GHz S DB R 50)
    ///
    /// Unlike the Touchstone standard, no defaults are assumed: the unit, the
    /// format and `R <value>` must all be present.
    pub fn parse_option_line(line: &str) -> Result<Self, TouchstoneError> {
        let body = line.trim().trim_start_matches('#');
        // Inline comment
        let body = body.split('!').next().unwrap_or_default();
        let parts: Vec<String> = body.split_whitespace().map(str::to_uppercase).collect();

        let frequency_unit = parts
            .iter()
            .find_map(|p| FrequencyUnit::from_str(p))
            .ok_or(TouchstoneError::MissingFrequencyUnit)?;

        let format = parts
            .iter()
            .find_map(|p| SParamFormat::from_str(p))
            .ok_or(TouchstoneError::MissingFormat)?;

        let reference_impedance = parts
            .iter()
            .position(|p| p == "R")
            .and_then(|i| parts.get(i + 1))
            .and_then(|v| v.parse::<f64>().ok())
            .ok_or(TouchstoneError::MissingReferenceImpedance)?;

        Ok(Self {
            frequency_unit,
            format,
            reference_impedance,
        })
    }
}
