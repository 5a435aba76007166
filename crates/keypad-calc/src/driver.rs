//! Calculator drivers
//!
//! A driver is whatever sits between a presentation surface and the engine.
//! The checks at the bottom of this module are written once against the
//! [`CalculatorDriver`] trait and run against every implementation.

use crate::config::EngineConfig;
use crate::core::CalcResult;
use crate::engine::ExpressionEngine;
use crate::keys::Key;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.enter_keys("1+2=").unwrap();
/// assert_eq!(driver.display(), "3");
/// ```
pub trait CalculatorDriver {
    /// Delivers one classified key
    fn press(&mut self, key: Key);

    /// Returns what the display currently shows
    fn display(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// Parses a keyboard string and presses every key in order
    ///
    /// Nothing is pressed if the string contains an unbound character.
    fn enter_keys(&mut self, keys: &str) -> CalcResult<()> {
        for key in Key::parse_sequence(keys)? {
            self.press(key);
        }
        Ok(())
    }
}

/// A display change produced by one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStep {
    /// The key that was pressed
    pub key: Key,
    /// Display after the key was applied
    pub display: String,
}

/// In-process driver wrapping an [`ExpressionEngine`]
#[derive(Debug, Clone, Default)]
pub struct EngineDriver {
    engine: ExpressionEngine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver whose engine uses `config`
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: ExpressionEngine::with_config(config),
        }
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub const fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    /// Returns a mutable reference to the underlying engine
    pub fn engine_mut(&mut self) -> &mut ExpressionEngine {
        &mut self.engine
    }

    /// Like [`CalculatorDriver::enter_keys`], recording the display after
    /// every key
    pub fn enter_keys_traced(&mut self, keys: &str) -> CalcResult<Vec<KeyStep>> {
        let keys = Key::parse_sequence(keys)?;
        Ok(keys
            .into_iter()
            .map(|key| {
                self.press(key);
                KeyStep {
                    key,
                    display: self.display(),
                }
            })
            .collect())
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, key: Key) {
        self.engine.press(key);
    }

    fn display(&self) -> String {
        self.engine.current_display().to_string()
    }

    fn clear(&mut self) {
        self.engine.clear();
    }
}

// ===== Driver-independent checks =====
// These work with ANY CalculatorDriver implementation

fn check<D: CalculatorDriver>(driver: &mut D, keys: &str, expected: &str) {
    driver.clear();
    driver
        .enter_keys(keys)
        .unwrap_or_else(|e| panic!("keys {keys:?} should parse: {e}"));
    assert_eq!(driver.display(), expected, "after keys {keys:?}");
}

/// Verifies basic arithmetic and rendering
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "1+2=", "3");
    check(driver, "10-4=", "6");
    check(driver, "6x7=", "42");
    check(driver, "20/4=", "5");
    check(driver, "2-5=", "-3");
    check(driver, "1/3=", "0.333333333");
}

/// Verifies that malformed input is ignored
pub fn verify_rejected_input<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "+", "0");
    check(driver, "5+*2", "5+2");
    check(driver, "1.2.3", "1.23");
    check(driver, "7+.", "7+");
    check(driver, "3.+", "3.");
}

/// Verifies the equals edge cases
pub fn verify_equals<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "50.5=", "50.5");
    check(driver, "9+=", "9+");
    check(driver, "1+2==", "3");
    check(driver, "5/0=", "0");
}

/// Verifies sign toggle and percent
pub fn verify_unary_commands<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "8%", "0.08");
    check(driver, "9~", "-9");
    check(driver, "9~~", "9");
    check(driver, "~%", "0");
    check(driver, "9+~", "9+");
}

/// Runs every driver check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_rejected_input(driver);
    verify_equals(driver);
    verify_unary_commands(driver);
}
