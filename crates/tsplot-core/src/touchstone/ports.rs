//! Port count resolution
//!
//! The port count comes from the `.sNp` file extension when present,
//! otherwise it is inferred from the length of the numeric token stream.

use std::fmt;

use super::parser::TouchstoneError;
use crate::constants::MAX_INFERRED_PORTS;

/// Where a resolved port count came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortSource {
    /// `.sNp` suffix of the file name
    Filename,
    /// Smallest n whose record length divides the token count
    Divisibility,
}

impl fmt::Display for PortSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortSource::Filename => f.write_str("filename"),
            PortSource::Divisibility => f.write_str("divisibility"),
        }
    }
}

/// A resolved port count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortResolution {
    pub nports: usize,
    pub source: PortSource,
}

/// Number of tokens in one frequency record: `1 + n² · 2`
///
/// Returns `None` if the length does not fit in a `usize`.
#[inline]
pub fn sample_length(nports: usize) -> Option<usize> {
    nports
        .checked_mul(nports)?
        .checked_mul(2)?
        .checked_add(1)
}

/// Parse the port count from a `.sNp` suffix (case-insensitive).
///
/// Accepts a bare file name or a full path. Returns `None` for `.s0p` and
/// for counts above `MAX_INFERRED_PORTS`, leaving the count to inference.
pub fn nports_from_filename(filename: &str) -> Option<usize> {
    let lower = filename.to_ascii_lowercase();
    let stem = lower.strip_suffix('p')?;
    let idx = stem.rfind(".s")?;
    let digits = &stem[idx + 2..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_INFERRED_PORTS).contains(n))
}

/// Smallest n in `1..=MAX_INFERRED_PORTS` whose record length divides
/// `token_count` evenly. An empty stream resolves to nothing.
pub fn nports_from_token_count(token_count: usize) -> Option<usize> {
    if token_count == 0 {
        return None;
    }
    (1..=MAX_INFERRED_PORTS)
        .find(|&n| sample_length(n).is_some_and(|len| token_count % len == 0))
}

/// Resolve the port count, preferring the file name hint.
pub fn resolve_port_count(
    filename: &str,
    token_count: usize,
) -> Result<PortResolution, TouchstoneError> {
    if let Some(nports) = nports_from_filename(filename) {
        return Ok(PortResolution {
            nports,
            source: PortSource::Filename,
        });
    }

    nports_from_token_count(token_count)
        .map(|nports| PortResolution {
            nports,
            source: PortSource::Divisibility,
        })
        .ok_or(TouchstoneError::PortCountUnresolved { token_count })
}
