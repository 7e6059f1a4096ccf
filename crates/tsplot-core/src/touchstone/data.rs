//! Data line assembly
//!
//! Touchstone allows one frequency record to wrap across several physical
//! lines, so all data lines are joined into one flat token stream before any
//! record boundaries are considered.

use super::parser::{ParseOptions, TouchstoneError};

/// Ordered numeric tokens from the data section of a file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    values: Vec<f64>,
    /// Tokens that were not numeric and were dropped
    dropped: usize,
}

impl TokenStream {
    /// Build a stream directly from numeric values
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values, dropped: 0 }
    }

    /// Tokenize a flat data string.
    ///
    /// Non-numeric tokens are dropped unless `options.strict` is set, in which
    /// case the first one raises `MalformedNumericToken`.
    pub fn tokenize(flat: &str, options: &ParseOptions) -> Result<Self, TouchstoneError> {
        let mut values = Vec::new();
        let mut dropped = 0;

        for token in flat.split_whitespace() {
            match parse_number(token) {
                Some(v) => values.push(v),
                None if options.strict => {
                    return Err(TouchstoneError::MalformedNumericToken {
                        token: token.to_string(),
                    })
                }
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            tracing::warn!(dropped, "dropped non-numeric data tokens");
        }

        Ok(Self { values, dropped })
    }

    /// Numeric values in file order
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of numeric tokens
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of non-numeric tokens dropped while tokenizing
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Join every data line into one space-separated string.
///
/// Blank lines, `!` comment lines and `#` option lines are skipped. Text after
/// an inline `!` is treated as a comment and removed.
pub fn assemble_data_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut flat = String::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('!') || trimmed.starts_with('#') {
            continue;
        }

        let data = match trimmed.find('!') {
            Some(idx) => trimmed[..idx].trim_end(),
            None => trimmed,
        };

        if !flat.is_empty() {
            flat.push(' ');
        }
        flat.push_str(data);
    }
    flat
}

/// Collect the text of `!` comments, both whole-line and inline.
pub fn collect_comments<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let idx = line.find('!')?;
            Some(line[idx + 1..].trim().to_string())
        })
        .collect()
}

/// Parse one token as a finite real number.
///
/// `NaN`, `inf` and `infinity` parse as `f64` but count as non-numeric.
fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
