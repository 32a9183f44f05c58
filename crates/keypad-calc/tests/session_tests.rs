//! Keypad session integration tests
//!
//! Drive a session through keypad labels the way the display shell does and
//! check what ends up on the input and result lines.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use keypad_calc::prelude::*;
use proptest::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route library events to the test output (respects RUST_LOG)
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}

fn run(labels: &[&str]) -> Session {
    init_tracing();
    let mut session = Session::new();
    session.press_labels(labels.iter().copied());
    session
}

// ============================================================================
// Equals
// ============================================================================

#[test]
fn test_typed_expression_evaluates() {
    let s = run(&["1", "2", "x", "3", "+", "4", "="]);
    assert_eq!(s.input(), "12x3+4");
    assert_eq!(s.result(), "40.0");
}

#[test]
fn test_decimal_result() {
    let s = run(&["1", "0", "÷", "4", "="]);
    assert_eq!(s.result(), "2.5");
}

#[test]
fn test_float_noise_shown_verbatim() {
    let s = run(&[".", "1", "+", ".", "2", "="]);
    assert_eq!(s.result(), "0.30000000000000004");
}

#[test]
fn test_large_result_scientific() {
    let s = run(&["5", "0", "0", "0", "x", "5", "0", "0", "0", "="]);
    assert_eq!(s.result(), "2.5E7");
}

#[test]
fn test_repeated_equals_is_stable() {
    let mut s = run(&["9", "-", "4", "-", "2", "="]);
    assert_eq!(s.result(), "3.0");
    s.press(Key::Equals);
    assert_eq!(s.result(), "3.0");
}

#[test]
fn test_parenthesised_input() {
    let s = run(&["(", "2", "+", "3", ")", "x", "4", "="]);
    assert_eq!(s.result(), "20.0");
}

// ============================================================================
// Failures collapse to one placeholder
// ============================================================================

#[test]
fn test_every_failure_shows_placeholder() {
    let cases: [(&[&str], EvalError); 5] = [
        (&["="], EvalError::MalformedExpression),
        (&["4", "÷", "0", "="], EvalError::DivisionByZero),
        (&["(", "2", "="], EvalError::UnbalancedParentheses),
        (&["2", ")", "="], EvalError::UnbalancedParentheses),
        (
            &["1", ".", "2", ".", "3", "="],
            EvalError::InvalidNumberLiteral("1.2.3".into()),
        ),
    ];
    for (labels, expected) in cases {
        let s = run(labels);
        assert_eq!(s.result(), "Error", "labels {labels:?}");
        assert_eq!(s.last_error(), Some(&expected), "labels {labels:?}");
    }
}

#[test]
fn test_recover_after_error_with_delete() {
    let mut s = run(&["8", "÷", "0", "="]);
    assert_eq!(s.result(), "Error");
    s.press_labels(["⌫", "2", "="]);
    assert_eq!(s.input(), "8÷2");
    assert_eq!(s.result(), "4.0");
}

// ============================================================================
// Percent and clear
// ============================================================================

#[test]
fn test_percent_then_continue() {
    let s = run(&["2", "5", "%", "+", "1", "="]);
    assert_eq!(s.result(), "1.25");
}

#[test]
fn test_clear_resets_everything() {
    let mut s = run(&["7", "x", "6", "="]);
    s.press(Key::Clear);
    assert_eq!(s.input(), "");
    assert_eq!(s.result(), "");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_session_from_json_config() {
    init_tracing();
    let config = CalculatorConfig::from_json(
        r#"{ "error_text": "Math error", "multiply_glyph": "×", "max_input_len": 8 }"#,
    )
    .unwrap();
    let mut s = Session::with_config(config);
    s.press_labels(["3", "x", "3", "="]);
    assert_eq!(s.input(), "3×3");
    assert_eq!(s.result(), "9.0");

    s.press_labels(["÷", "0", "="]);
    assert_eq!(s.result(), "Math error");
}

// ============================================================================
// Property tests
// ============================================================================

fn label_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("0"),
        Just("1"),
        Just("5"),
        Just("9"),
        Just("00"),
        Just("."),
        Just("+"),
        Just("-"),
        Just("x"),
        Just("÷"),
        Just("("),
        Just(")"),
        Just("%"),
        Just("⌫"),
        Just("AC"),
        Just("="),
    ]
}

proptest! {
    /// The result line is always empty, a formatted number or the placeholder
    #[test]
    fn prop_result_is_number_or_placeholder(labels in proptest::collection::vec(label_strategy(), 0..30)) {
        let mut s = Session::new();
        s.press_labels(labels.iter().copied());
        let result = s.result();
        prop_assert!(
            result.is_empty()
                || result == "Error"
                || result.parse::<f64>().is_ok()
                || matches!(result, "NaN" | "Infinity" | "-Infinity"),
            "unexpected result {result:?}"
        );
        prop_assert_eq!(result == "Error", s.last_error().is_some());
    }

    /// Display text and the glyph-free evaluation agree
    #[test]
    fn prop_display_matches_evaluate_display(labels in proptest::collection::vec(label_strategy(), 0..20)) {
        let mut s = Session::new();
        s.press_labels(labels.iter().copied());
        s.press(Key::Equals);
        match evaluate_display(s.input()) {
            Ok(value) => prop_assert_eq!(s.result(), format_result(value)),
            Err(err) => prop_assert_eq!(s.last_error(), Some(&err)),
        }
    }

    /// Max length is never exceeded
    #[test]
    fn prop_max_input_len_respected(
        limit in 1usize..12,
        labels in proptest::collection::vec(label_strategy(), 0..40),
    ) {
        let mut s = Session::with_config(CalculatorConfig::new().with_max_input_len(limit));
        s.press_labels(labels.iter().copied());
        prop_assert!(s.input().chars().count() <= limit);
    }
}
