//! Engine configuration

use serde::{Deserialize, Serialize};

/// Tunables for the expression engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fractional digits kept when a result is stored
    pub fraction_digits: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fraction_digits: Self::DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl EngineConfig {
    /// Default rounding applied to every evaluated result
    pub const DEFAULT_FRACTION_DIGITS: u32 = 9;

    /// Upper bound accepted for `fraction_digits`; beyond this an f64 has
    /// no meaningful digits left to keep
    pub const MAX_FRACTION_DIGITS: u32 = 17;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of fractional digits, clamped to `MAX_FRACTION_DIGITS`
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits.min(Self::MAX_FRACTION_DIGITS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fraction_digits() {
        assert_eq!(EngineConfig::default().fraction_digits, 9);
        assert_eq!(EngineConfig::new(), EngineConfig::default());
    }

    #[test]
    fn test_with_fraction_digits() {
        let config = EngineConfig::new().with_fraction_digits(4);
        assert_eq!(config.fraction_digits, 4);
    }

    #[test]
    fn test_with_fraction_digits_clamps() {
        let config = EngineConfig::new().with_fraction_digits(40);
        assert_eq!(config.fraction_digits, EngineConfig::MAX_FRACTION_DIGITS);
    }

    #[test]
    fn test_deserialize_missing_field_uses_default() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_deserialize_fraction_digits() {
        let config: EngineConfig = serde_json::from_str(r#"{"fraction_digits":3}"#).unwrap();
        assert_eq!(config.fraction_digits, 3);
    }
}
