//! Keypad Calc - four-function expression evaluator
//!
//! Evaluates strings built from numbers, `+ - * /` and parentheses with a
//! single two-stack scan, and models the keypad that produces those strings.
//!
//! - [`core`]: tokenizer, operators, evaluator, result formatting
//! - [`sanitize`]: display glyphs (`x`, `×`, `÷`) to canonical symbols
//! - [`session`]: headless keypad (append, delete, clear, percent, equals)
//! - [`config`]: placeholder text, glyphs and input limit
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
//! assert_eq!(evaluate("8 - 3 - 2"), Ok(3.0));
//! assert_eq!(evaluate("3 / 0"), Err(EvalError::DivisionByZero));
//!
//! // Display glyphs go through the sanitizer first
//! assert_eq!(evaluate_display("6x7"), Ok(42.0));
//!
//! let mut session = Session::new();
//! session.press_labels(["1", ".", "5", "+", "2", ".", "5", "="]);
//! assert_eq!(session.result(), "4.0");
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
pub mod sanitize;
pub mod session;

use crate::core::evaluator::evaluate;
use crate::core::EvalResult;
use crate::sanitize::Sanitizer;

/// Sanitizes display glyphs with the default table, then evaluates
pub fn evaluate_display(expression: &str) -> EvalResult<f64> {
    evaluate(&Sanitizer::new().sanitize(expression))
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, ConfigResult};
    pub use crate::core::evaluator::evaluate;
    pub use crate::core::format::format_result;
    pub use crate::core::tokenizer::{Token, Tokenizer};
    pub use crate::core::{apply_symbol, EvalError, EvalResult, Operator};
    pub use crate::evaluate_display;
    pub use crate::sanitize::Sanitizer;
    pub use crate::session::{Key, Session, KEYPAD_LAYOUT};
}
