//! Property-based tests for the expression engine
//!
//! Error prevention: random key sequences catch acceptance edge cases that
//! hand-written scenarios miss

#![allow(clippy::unwrap_used)]

use keypad_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn entry_token_strategy() -> impl Strategy<Value = EntryToken> {
    prop_oneof![
        4 => (0u8..=9u8).prop_map(EntryToken::Digit),
        1 => Just(EntryToken::Decimal),
        2 => operator_strategy().prop_map(EntryToken::Operator),
    ]
}

/// Entry tokens plus clear: the inputs that never evaluate
fn typing_key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        12 => entry_token_strategy().prop_map(Key::Entry),
        1 => Just(Key::Clear),
    ]
}

fn any_key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        10 => entry_token_strategy().prop_map(Key::Entry),
        1 => Just(Key::Equals),
        1 => Just(Key::ToggleSign),
        1 => Just(Key::Percent),
        1 => Just(Key::Clear),
    ]
}

fn run(keys: &[Key]) -> ExpressionEngine {
    let mut engine = ExpressionEngine::new();
    for &key in keys {
        engine.press(key);
    }
    engine
}

fn operands(expression: &str) -> impl Iterator<Item = &str> {
    expression.split(Operation::is_glyph)
}

// ===== Typing properties =====

proptest! {
    /// Digits concatenate; only the initial zero collapses
    #[test]
    fn prop_digits_concatenate(digits in prop::collection::vec(0u8..=9u8, 1..20)) {
        let keys: Vec<Key> = digits.iter().map(|&d| Key::Entry(EntryToken::Digit(d))).collect();
        let engine = run(&keys);

        let typed: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(engine.current_display(), expected);
    }

    /// No two operator glyphs are ever adjacent
    #[test]
    fn prop_no_adjacent_operators(keys in prop::collection::vec(typing_key_strategy(), 0..40)) {
        let engine = run(&keys);
        let chars: Vec<char> = engine.current_display().chars().collect();
        for pair in chars.windows(2) {
            prop_assert!(
                !(Operation::is_glyph(pair[0]) && Operation::is_glyph(pair[1])),
                "adjacent operators in {}", engine.current_display()
            );
        }
    }

    /// Each operand holds at most one decimal point
    #[test]
    fn prop_one_decimal_point_per_operand(keys in prop::collection::vec(typing_key_strategy(), 0..40)) {
        let engine = run(&keys);
        for operand in operands(engine.current_display()) {
            prop_assert!(
                operand.matches('.').count() <= 1,
                "operand {} in {}", operand, engine.current_display()
            );
        }
    }

    /// Typing never produces a leading operator
    #[test]
    fn prop_no_leading_operator(keys in prop::collection::vec(typing_key_strategy(), 0..40)) {
        let engine = run(&keys);
        let first = engine.current_display().chars().next().unwrap();
        prop_assert!(!Operation::is_glyph(first));
    }
}

// ===== Evaluation properties =====

proptest! {
    /// Equals on a non-digit tail changes nothing
    #[test]
    fn prop_evaluate_noop_on_non_digit_tail(keys in prop::collection::vec(typing_key_strategy(), 1..30)) {
        let mut engine = run(&keys);
        let last = engine.current_display().chars().last().unwrap();
        prop_assume!(!last.is_ascii_digit());

        let before = engine.state().clone();
        engine.evaluate(None);
        prop_assert_eq!(engine.state(), &before);
    }

    /// Pressing equals twice gives the same display as pressing it once
    #[test]
    fn prop_evaluate_idempotent(keys in prop::collection::vec(typing_key_strategy(), 0..30)) {
        let mut engine = run(&keys);
        engine.evaluate(None);
        let once = engine.state().clone();
        engine.evaluate(None);
        prop_assert_eq!(engine.state(), &once);
    }

    /// The display is never empty and stays within the keypad alphabet
    #[test]
    fn prop_display_presentable(keys in prop::collection::vec(any_key_strategy(), 0..50)) {
        let engine = run(&keys);
        let display = engine.current_display();
        prop_assert!(!display.is_empty());
        prop_assert!(
            display.chars().all(|c| c.is_ascii_digit() || c == '.' || Operation::is_glyph(c)),
            "unexpected display {}", display
        );
    }

    /// Clear always returns to the initial state
    #[test]
    fn prop_clear_resets(keys in prop::collection::vec(any_key_strategy(), 0..50)) {
        let mut engine = run(&keys);
        engine.clear();
        prop_assert_eq!(engine.state(), &EngineState::initial());
    }

    /// Sign toggle and percent do nothing until input has started
    #[test]
    fn prop_unary_commands_need_started_input(
        cmd in prop_oneof![Just(Key::ToggleSign), Just(Key::Percent)],
        ops in prop::collection::vec(operator_strategy(), 0..4)
    ) {
        let mut keys: Vec<Key> = ops.into_iter().map(|op| Key::Entry(EntryToken::Operator(op))).collect();
        keys.push(cmd);
        let engine = run(&keys);
        prop_assert_eq!(engine.state(), &EngineState::initial());
    }

    /// A rejected token leaves the pure state untouched
    #[test]
    fn prop_rejection_preserves_state(
        keys in prop::collection::vec(entry_token_strategy(), 0..30),
        next in entry_token_strategy()
    ) {
        let state = keys.into_iter().fold(EngineState::initial(), EngineState::after);
        if let Step::Rejected(_) = state.step(next) {
            prop_assert_eq!(state.clone().after(next), state);
        }
    }
}
