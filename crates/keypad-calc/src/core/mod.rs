//! Expression evaluation core
//!
//! Tokenizer, operator table, two-stack evaluator and result formatting.
//! Nothing in here holds state between calls.

pub mod evaluator;
pub mod format;
mod operations;
pub mod tokenizer;

pub use operations::{apply_symbol, has_precedence, Operator, StackEntry};

use thiserror::Error;

/// Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluation failure kinds
///
/// The keypad shell collapses all of these into one placeholder; the
/// distinction exists for callers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Character outside digits, `.`, whitespace, operators and parentheses
    #[error("Invalid character in expression: '{0}'")]
    InvalidCharacter(char),

    /// Run of digits and decimal points that is not a number
    #[error("Invalid number literal: '{0}'")]
    InvalidNumberLiteral(String),

    /// `)` without a matching `(`, or `(` never closed
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    /// Stacks did not reduce to exactly one value
    #[error("Malformed expression")]
    MalformedExpression,

    /// Right operand of a division was zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Symbol reached the apply step without being `+`, `-`, `*` or `/`
    #[error("Unsupported operator: '{0}'")]
    UnsupportedOperator(char),
}

impl EvalError {
    /// Short machine-friendly name of the failure kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCharacter(_) => "invalid_character",
            Self::InvalidNumberLiteral(_) => "invalid_number_literal",
            Self::UnbalancedParentheses => "unbalanced_parentheses",
            Self::MalformedExpression => "malformed_expression",
            Self::DivisionByZero => "division_by_zero",
            Self::UnsupportedOperator(_) => "unsupported_operator",
        }
    }
}
