//! Frequency unit handling
//!
//! Touchstone option lines declare the unit of the frequency column.
//! All decoded frequencies are stored in Hz.

use std::fmt;

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrequencyUnit {
    Hz,
    KHz,
    MHz,
    GHz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "HZ" => Some(FrequencyUnit::Hz),
            "KHZ" => Some(FrequencyUnit::KHz),
            "MHZ" => Some(FrequencyUnit::MHz),
            "GHZ" => Some(FrequencyUnit::GHz),
            _ => None,
        }
    }

    /// Convert a value expressed in this unit to Hz
    #[inline]
    pub fn to_hz(self, value: f64) -> f64 {
        value * self.multiplier()
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frequency_unit_multiplier() {
        assert_eq!(FrequencyUnit::Hz.multiplier(), 1.0);
        assert_eq!(FrequencyUnit::KHz.multiplier(), 1e3);
        assert_eq!(FrequencyUnit::MHz.multiplier(), 1e6);
        assert_eq!(FrequencyUnit::GHz.multiplier(), 1e9);
    }

    #[test]
    fn test_frequency_unit_from_str() {
        assert_eq!(FrequencyUnit::from_str("ghz"), Some(FrequencyUnit::GHz));
        assert_eq!(FrequencyUnit::from_str("GHZ"), Some(FrequencyUnit::GHz));
        assert_eq!(FrequencyUnit::from_str("kHz"), Some(FrequencyUnit::KHz));
        assert_eq!(FrequencyUnit::from_str("Hz"), Some(FrequencyUnit::Hz));
        assert_eq!(FrequencyUnit::from_str("THz"), None);
        assert_eq!(FrequencyUnit::from_str("invalid"), None);
    }

    #[test]
    fn test_to_hz() {
        assert_relative_eq!(FrequencyUnit::MHz.to_hz(2.5), 2.5e6, epsilon = 1e-6);
        assert_relative_eq!(FrequencyUnit::Hz.to_hz(42.0), 42.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(FrequencyUnit::KHz.to_string(), "kHz");
        assert_eq!(FrequencyUnit::GHz.to_string(), "GHz");
    }
}
