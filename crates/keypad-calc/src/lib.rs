//! Keypad Calc - input handling and evaluation core of a basic calculator
//!
//! The crate turns a stream of classified keypad tokens (digits, decimal
//! point, `+ - × ÷`, `=`, `±`, `%`, `AC`) into a single expression string
//! that is always safe to show on a display.
//!
//! # Principles
//!
//! - **Silent rejection**: malformed input (a second operator, a second
//!   decimal point, an operator before any number) is ignored, never raised
//! - **Reset on numeric fault**: division by zero and overflow return the
//!   calculator to its initial `0`
//! - **Fixed rounding**: results keep at most nine fractional digits by default
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut engine = ExpressionEngine::new();
//! engine.append(EntryToken::Digit(1));
//! engine.append(EntryToken::Operator(Operation::Add));
//! engine.append(EntryToken::Digit(2));
//! engine.evaluate(None);
//! assert_eq!(engine.current_display(), "3");
//!
//! engine.percent();
//! assert_eq!(engine.current_display(), "0.03");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod keys;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Calculator, Operation};
    pub use crate::driver::{CalculatorDriver, EngineDriver, KeyStep};
    pub use crate::engine::{EngineState, ExpressionEngine, InputLocks, Rejection, Step};
    pub use crate::keys::{EntryToken, Key};
}
