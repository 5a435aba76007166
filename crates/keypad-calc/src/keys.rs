//! Classified input tokens
//!
//! The presentation layer (buttons, keyboard, a CLI argument) decides which
//! token a physical input means; the engine only ever sees these types.

use crate::core::{CalcError, CalcResult, Operation};
use serde::{Deserialize, Serialize};

/// A token that extends the expression text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryToken {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operation),
}

impl EntryToken {
    /// Creates a digit token, rejecting values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// False for a digit token above 9
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Digit(d) if *d > 9)
    }

    /// Returns the character this token appends to the expression
    ///
    /// An out-of-range digit maps to U+FFFD; the engine rejects such tokens
    /// before they reach the expression.
    #[must_use]
    pub fn as_char(&self) -> char {
        match self {
            Self::Digit(d) => {
                char::from_digit(u32::from(*d), 10).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            Self::Decimal => '.',
            Self::Operator(op) => op.glyph(),
        }
    }
}

/// Any keypad input: an entry token or a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Extend the expression
    Entry(EntryToken),
    /// Evaluate (`=`)
    Equals,
    /// Negate the current value (`±`)
    ToggleSign,
    /// Scale the current value by 1/100 (`%`)
    Percent,
    /// Reset (`AC`)
    Clear,
}

impl Key {
    /// Keyboard binding table, in the order shown to users
    pub const BINDINGS: [(&'static str, &'static str); 10] = [
        ("0-9", "digit"),
        (".", "decimal point"),
        ("+", "add"),
        ("-", "subtract"),
        ("* x ×", "multiply"),
        ("/ ÷", "divide"),
        ("=", "equals"),
        ("%", "percent"),
        ("~ n ±", "toggle sign"),
        ("c C", "clear"),
    ];

    /// Maps a keyboard character to a key
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let key = match ch {
            '0'..='9' => Self::Entry(EntryToken::Digit(ch as u8 - b'0')),
            '.' => Self::Entry(EntryToken::Decimal),
            'x' => Self::Entry(EntryToken::Operator(Operation::Multiply)),
            '=' => Self::Equals,
            '%' => Self::Percent,
            '~' | 'n' | '±' => Self::ToggleSign,
            'c' | 'C' => Self::Clear,
            other => Self::Entry(EntryToken::Operator(Operation::from_char(other)?)),
        };
        Some(key)
    }

    /// Parses a whole key sequence, skipping whitespace
    ///
    /// Fails on the first unbound character, before any key is produced.
    pub fn parse_sequence(input: &str) -> CalcResult<Vec<Self>> {
        input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Self::from_char(c).ok_or(CalcError::UnknownKey(c)))
            .collect()
    }

    /// Returns the label printed on the keypad for this key
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Entry(token) => token.as_char().to_string(),
            Self::Equals => "=".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Clear => "AC".to_string(),
        }
    }
}

impl From<EntryToken> for Key {
    fn from(token: EntryToken) -> Self {
        Self::Entry(token)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
