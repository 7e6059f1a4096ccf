//! Named (frequency, value) series
//!
//! The parser produces one series per S-parameter; the signal pipeline
//! consumes and produces series of the same shape.

use std::fmt;
use std::str::FromStr;

/// A 1-indexed S-parameter position, displayed as `S{row}{col}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SParamName {
    pub row: usize,
    pub col: usize,
}

impl SParamName {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All names of an n-port network in row-major order (S11, S12, ..., Snn)
    pub fn all(nports: usize) -> Vec<Self> {
        (1..=nports)
            .flat_map(|row| (1..=nports).map(move |col| Self::new(row, col)))
            .collect()
    }
}

impl fmt::Display for SParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}{}", self.row, self.col)
    }
}

/// Error returned when a string is not of the form `S{row}{col}`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid S-parameter name: {0}")]
pub struct InvalidSParamName(pub String);

impl FromStr for SParamName {
    type Err = InvalidSParamName;

    /// Parses `S11`, `s21`, ... Indices with more than one digit are
    /// ambiguous in this notation, so only single-digit ports are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSParamName(s.to_string());
        let digits = s
            .strip_prefix('S')
            .or_else(|| s.strip_prefix('s'))
            .ok_or_else(invalid)?;

        let mut chars = digits.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let row = r.to_digit(10).filter(|&d| d > 0).ok_or_else(invalid)? as usize;
        let col = c.to_digit(10).filter(|&d| d > 0).ok_or_else(invalid)? as usize;
        Ok(Self::new(row, col))
    }
}

/// Error returned when a series is built from axes of different lengths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("frequency axis has {frequency} points but {values} values were given")]
pub struct SeriesLengthMismatch {
    pub frequency: usize,
    pub values: usize,
}

/// A named sequence of (frequency in Hz, value) pairs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SParamSeries {
    name: String,
    frequency: Vec<f64>,
    values: Vec<f64>,
}

impl SParamSeries {
    /// Create a series from a frequency axis and values of equal length
    pub fn try_new(
        name: impl Into<String>,
        frequency: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesLengthMismatch> {
        if frequency.len() != values.len() {
            return Err(SeriesLengthMismatch {
                frequency: frequency.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            frequency,
            values,
        })
    }

    /// Internal constructor for axes already known to match
    pub(crate) fn new(name: impl Into<String>, frequency: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(frequency.len(), values.len());
        Self {
            name: name.into(),
            frequency,
            values,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frequency axis in Hz
    #[inline]
    pub fn frequency(&self) -> &[f64] {
        &self.frequency
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate (frequency, value) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequency.iter().copied().zip(self.values.iter().copied())
    }

    /// Same axis, new name and values.
    ///
    /// The axis is resized to the length of `values`: cut after truncation,
    /// zero-filled if `values` is longer.
    pub fn with_values(&self, name: impl Into<String>, values: Vec<f64>) -> Self {
        let mut frequency = self.frequency.clone();
        frequency.resize(values.len(), 0.0);
        Self::new(name, frequency, values)
    }

    /// Keep only the first `len` points
    pub fn truncate(&mut self, len: usize) {
        self.frequency.truncate(len);
        self.values.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparam_name_display() {
        assert_eq!(SParamName::new(2, 1).to_string(), "S21");
    }

    #[test]
    fn test_sparam_name_all_row_major() {
        let names: Vec<String> = SParamName::all(2).iter().map(|n| n.to_string()).collect();
        assert_eq!(names, ["S11", "S12", "S21", "S22"]);
        assert_eq!(SParamName::all(3).len(), 9);
    }

    #[test]
    fn test_sparam_name_parse() {
        assert_eq!("S21".parse::<SParamName>().unwrap(), SParamName::new(2, 1));
        assert_eq!("s34".parse::<SParamName>().unwrap(), SParamName::new(3, 4));
        assert!("S0".parse::<SParamName>().is_err());
        assert!("S01".parse::<SParamName>().is_err());
        assert!("S123".parse::<SParamName>().is_err());
        assert!("X11".parse::<SParamName>().is_err());
    }

    #[test]
    fn test_series_points() {
        let s = SParamSeries::new("S11", vec![1.0, 2.0], vec![0.5, 0.25]);
        let points: Vec<(f64, f64)> = s.points().collect();
        assert_eq!(points, vec![(1.0, 0.5), (2.0, 0.25)]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_with_values_truncates_axis() {
        let s = SParamSeries::new("S11", vec![1.0, 2.0, 3.0, 4.0], vec![1.0; 4]);
        let half = s.with_values("S11 (DFT)", vec![9.0, 8.0]);
        assert_eq!(half.frequency(), &[1.0, 2.0]);
        assert_eq!(half.name(), "S11 (DFT)");
    }

    #[test]
    fn test_try_new_rejects_mismatched_lengths() {
        let err = SParamSeries::try_new("S11", vec![1.0], vec![]).unwrap_err();
        assert_eq!(
            err,
            SeriesLengthMismatch {
                frequency: 1,
                values: 0
            }
        );
        assert_eq!(
            err.to_string(),
            "frequency axis has 1 points but 0 values were given"
        );

        let s = SParamSeries::try_new("S11", vec![1.0], vec![0.5]).unwrap();
        assert_eq!(s.len(), 1);
    }
}
