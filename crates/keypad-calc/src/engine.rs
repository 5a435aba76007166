//! Expression engine: token acceptance and evaluation
//!
//! The engine holds one expression string plus three input locks. Each
//! public operation either advances the state to another valid state or
//! leaves it exactly as it was; nothing is reported back to the caller.
//!
//! Transitions on entry tokens are pure ([`EngineState::step`]); the
//! [`ExpressionEngine`] wrapper applies them, logs rejections and owns the
//! evaluation path shared by `=`, `±` and `%`.

use crate::config::EngineConfig;
use crate::core::evaluator::Evaluator;
use crate::core::format::format_result;
use crate::core::Operation;
use crate::keys::{EntryToken, Key};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Canonical reset value of the expression
pub const INITIAL_EXPRESSION: &str = "0";

/// Input-acceptance flags
///
/// These are logical guards, not synchronization primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLocks {
    /// The current operand already holds a decimal point
    pub decimal: bool,
    /// A structural token (operator or decimal point) was just accepted;
    /// cleared by the next digit
    pub operator: bool,
    /// Some digit or decimal point has been accepted since the last clear
    pub started: bool,
}

impl InputLocks {
    /// Sign toggle and percent only apply to a started, operator-free tail
    #[must_use]
    pub const fn allows_unary(&self) -> bool {
        self.started && !self.operator
    }
}

/// Why an entry token was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Operator pressed before any operand was entered
    OperatorBeforeOperand,
    /// Second decimal point in the same operand
    DecimalLocked,
    /// Operator right after an operator or decimal point
    OperatorLocked,
    /// Digit token outside 0-9
    DigitOutOfRange,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperatorBeforeOperand => write!(f, "operator before first operand"),
            Self::DecimalLocked => write!(f, "operand already has a decimal point"),
            Self::OperatorLocked => write!(f, "operator must follow a digit"),
            Self::DigitOutOfRange => write!(f, "digit must be 0-9"),
        }
    }
}

/// Outcome of applying one entry token to a state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Token accepted; this is the successor state
    Accepted(EngineState),
    /// Token ignored; the state is unchanged
    Rejected(Rejection),
}

/// Expression text plus input locks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    expression: String,
    locks: InputLocks,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::initial()
    }
}

impl EngineState {
    /// The start (and reset) state: `"0"` with every lock released
    #[must_use]
    pub fn initial() -> Self {
        Self {
            expression: INITIAL_EXPRESSION.to_string(),
            locks: InputLocks::default(),
        }
    }

    /// Returns the expression text
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the current locks
    #[must_use]
    pub const fn locks(&self) -> InputLocks {
        self.locks
    }

    /// True when the expression holds the canonical `"0"`
    #[must_use]
    pub fn at_initial_expression(&self) -> bool {
        self.expression == INITIAL_EXPRESSION
    }

    /// Applies one entry token
    #[must_use]
    pub fn step(&self, token: EntryToken) -> Step {
        if !token.is_valid() {
            return Step::Rejected(Rejection::DigitOutOfRange);
        }
        if self.at_initial_expression() {
            return self.step_from_zero(token);
        }

        let mut next = self.clone();
        match token {
            EntryToken::Digit(_) => {
                // only a digit right after an operator glyph starts a fresh
                // operand; after a decimal point the operand keeps its lock
                if self.expression.ends_with(Operation::is_glyph) {
                    next.locks.decimal = false;
                }
                next.locks.operator = false;
            }
            EntryToken::Decimal => {
                if self.locks.decimal {
                    return Step::Rejected(Rejection::DecimalLocked);
                }
                next.locks.decimal = true;
                next.locks.operator = true;
            }
            EntryToken::Operator(_) => {
                if self.locks.operator {
                    return Step::Rejected(Rejection::OperatorLocked);
                }
                next.locks.decimal = true;
                next.locks.operator = true;
            }
        }
        next.expression.push(token.as_char());
        Step::Accepted(next)
    }

    fn step_from_zero(&self, token: EntryToken) -> Step {
        let mut next = self.clone();
        match token {
            EntryToken::Operator(_) => return Step::Rejected(Rejection::OperatorBeforeOperand),
            EntryToken::Decimal => {
                next.expression.push('.');
                next.locks.decimal = true;
            }
            EntryToken::Digit(_) => {
                next.expression = token.as_char().to_string();
            }
        }
        next.locks.started = true;
        Step::Accepted(next)
    }

    /// Applies one entry token, keeping the state unchanged on rejection
    #[must_use]
    pub fn after(self, token: EntryToken) -> Self {
        match self.step(token) {
            Step::Accepted(next) => next,
            Step::Rejected(_) => self,
        }
    }

    /// Replaces the expression with an evaluated result; locks carry over
    #[must_use]
    fn with_result(mut self, result: String) -> Self {
        self.expression = result;
        self
    }
}

/// What evaluating an expression does to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    /// Store this rendered result
    Value(String),
    /// Numeric fault (division by zero, overflow, NaN): reset the engine
    Reset,
    /// Nothing to evaluate: trailing operator/point, or unparseable text
    Unchanged,
}

/// Evaluates an expression string the way `=` does
///
/// Requires a digit as the last character, rounds the result to
/// `fraction_digits` and renders it in shortest form.
#[must_use]
pub fn reduce_expression(expression: &str, fraction_digits: u32) -> Reduction {
    if !expression.chars().last().is_some_and(|c| c.is_ascii_digit()) {
        return Reduction::Unchanged;
    }

    match Evaluator::new().evaluate_str(expression) {
        Ok(value) if value.is_finite() => Reduction::Value(format_result(value, fraction_digits)),
        Ok(_) => Reduction::Reset,
        Err(e) if e.is_numeric_fault() => Reduction::Reset,
        Err(_) => Reduction::Unchanged,
    }
}

/// The calculator's single stateful component
#[derive(Debug, Clone, Default)]
pub struct ExpressionEngine {
    state: EngineState,
    config: EngineConfig,
}

impl ExpressionEngine {
    /// Creates an engine in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: EngineState::initial(),
            config: EngineConfig::new().with_fraction_digits(config.fraction_digits),
        }
    }

    /// Returns the configuration in use
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Returns the full state (expression and locks)
    #[must_use]
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// Read-only projection of the expression for rendering
    #[must_use]
    pub fn current_display(&self) -> &str {
        self.state.expression()
    }

    /// Appends a digit, decimal point or operator, or silently ignores it
    pub fn append(&mut self, token: EntryToken) {
        match self.state.step(token) {
            Step::Accepted(next) => {
                trace!(token = %token.as_char(), expression = %next.expression, "token accepted");
                self.state = next;
            }
            Step::Rejected(reason) => {
                debug!(
                    token = %token.as_char(),
                    expression = %self.state.expression,
                    %reason,
                    "token rejected"
                );
            }
        }
    }

    /// The equals action, optionally on a substitute expression
    pub fn evaluate(&mut self, override_expression: Option<&str>) {
        let expression = override_expression.unwrap_or(&self.state.expression);
        match reduce_expression(expression, self.config.fraction_digits) {
            Reduction::Value(result) => {
                trace!(%expression, %result, "evaluated");
                let state = std::mem::take(&mut self.state);
                self.state = state.with_result(result);
            }
            Reduction::Reset => {
                debug!(%expression, "non-finite result, resetting");
                self.clear();
            }
            Reduction::Unchanged => {
                debug!(%expression, "nothing to evaluate");
            }
        }
    }

    /// Negates the current value
    pub fn toggle_sign(&mut self) {
        self.scale_by("-1", "toggle sign");
    }

    /// Divides the current value by 100
    pub fn percent(&mut self) {
        self.scale_by("0.01", "percent");
    }

    fn scale_by(&mut self, factor: &str, action: &str) {
        if !self.state.locks.allows_unary() {
            debug!(action, locks = ?self.state.locks, "ignored");
            return;
        }
        let synthetic = format!(
            "{factor}{}{}",
            Operation::Multiply.symbol(),
            self.state.expression
        );
        self.evaluate(Some(&synthetic));
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        self.state = EngineState::initial();
    }

    /// Dispatches any keypad key to the matching operation
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Entry(token) => self.append(token),
            Key::Equals => self.evaluate(None),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Clear => self.clear(),
        }
    }
}
