//! Sample decoding
//!
//! Splits the flat token stream into frequency records and reads the
//! `(c1, c2)` pair of every S-parameter entry.

use ndarray::Array2;
use num_complex::Complex64;

use super::header::{SParamFormat, TouchstoneHeader};
use super::ports::sample_length;

/// One raw parameter entry as written in the file.
///
/// `(c1, c2)` is dB/angle, magnitude/angle or real/imaginary depending on
/// the declared format.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    pub c1: f64,
    pub c2: f64,
}

impl Reading {
    pub fn new(c1: f64, c2: f64) -> Self {
        Self { c1, c2 }
    }

    /// Linear magnitude under `format`
    #[inline]
    pub fn magnitude(&self, format: SParamFormat) -> f64 {
        format.magnitude(self.c1, self.c2)
    }

    /// Complex value under `format`
    #[inline]
    pub fn to_complex(&self, format: SParamFormat) -> Complex64 {
        format.to_complex(self.c1, self.c2)
    }
}

/// One frequency point
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Frequency in Hz
    pub frequency: f64,
    /// Parameter matrix [nports, nports], row-major as in the file
    pub readings: Array2<Reading>,
}

impl Sample {
    /// Reading at 1-indexed `(row, col)`
    pub fn reading(&self, row: usize, col: usize) -> Option<Reading> {
        if row == 0 || col == 0 {
            return None;
        }
        self.readings.get((row - 1, col - 1)).copied()
    }

    /// Complex parameter matrix under `format`
    pub fn to_complex(&self, format: SParamFormat) -> Array2<Complex64> {
        self.readings.mapv(|r| r.to_complex(format))
    }
}

/// Decode complete records from `tokens`.
///
/// `floor(len / record)` samples are produced; any trailing partial record is
/// left unread. Entries are read row-major: for each row port, each column
/// port, two consecutive tokens.
pub fn decode_samples(header: &TouchstoneHeader, nports: usize, tokens: &[f64]) -> Vec<Sample> {
    let Some(record) = sample_length(nports) else {
        return Vec::new();
    };
    let multiplier = header.frequency_unit.multiplier();

    tokens
        .chunks_exact(record)
        .map(|chunk| {
            let readings = Array2::from_shape_fn((nports, nports), |(i, j)| {
                let idx = 1 + (i * nports + j) * 2;
                Reading::new(chunk[idx], chunk[idx + 1])
            });
            Sample {
                frequency: chunk[0] * multiplier,
                readings,
            }
        })
        .collect()
}

/// Number of tokens beyond the last complete record
#[inline]
pub fn trailing_tokens(nports: usize, token_count: usize) -> usize {
    sample_length(nports).map_or(token_count, |len| token_count % len)
}
