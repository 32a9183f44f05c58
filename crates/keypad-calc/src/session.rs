//! Headless keypad session
//!
//! The keystroke side of the calculator without any rendering: keys edit an
//! input line, `=` evaluates it and fills the result line. Every failure shows
//! the same placeholder text; the specific kind stays available through
//! [`Session::last_error`].

use crate::config::CalculatorConfig;
use crate::core::evaluator::evaluate;
use crate::core::format::format_result;
use crate::core::{EvalError, Operator};
use crate::sanitize::Sanitizer;

/// Standard keypad layout, row by row
/// ```text
/// [ AC ] [ ⌫ ] [ 00 ] [ ÷ ]
/// [ 7  ] [ 8 ] [ 9  ] [ x ]
/// [ 4  ] [ 5 ] [ 6  ] [ - ]
/// [ 1  ] [ 2 ] [ 3  ] [ + ]
/// [ %  ] [ 0 ] [ .  ] [ = ]
/// ```
pub const KEYPAD_LAYOUT: [[&str; 4]; 5] = [
    ["AC", "⌫", "00", "÷"],
    ["7", "8", "9", "x"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["%", "0", ".", "="],
];

/// A keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Single digit; only 0-9 type anything, see [`Key::digit`]
    Digit(u8),
    /// `00`
    DoubleZero,
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Divide the current number by 100
    Percent,
    /// Delete the last character
    Delete,
    /// Clear input and result
    Clear,
    /// Evaluate
    Equals,
}

impl Key {
    /// Digit key for `d`, or None past 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Parses a keypad label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let key = match label {
            "00" => Self::DoubleZero,
            "." => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "x" | "×" | "*" => Self::Operator(Operator::Multiply),
            "÷" | "/" => Self::Operator(Operator::Divide),
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            "%" => Self::Percent,
            "⌫" => Self::Delete,
            "AC" => Self::Clear,
            "=" => Self::Equals,
            _ => {
                let mut chars = label.chars();
                let digit = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                return Self::digit(digit as u8);
            }
        };
        Some(key)
    }

    /// Text appended to the input, for keys that append
    fn text(self, config: &CalculatorConfig) -> Option<String> {
        let text = match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10)?.to_string(),
            Self::DoubleZero => "00".to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(Operator::Multiply) => config.multiply_glyph.to_string(),
            Self::Operator(Operator::Divide) => config.divide_glyph.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::OpenParen => "(".to_string(),
            Self::CloseParen => ")".to_string(),
            Self::Percent | Self::Delete | Self::Clear | Self::Equals => return None,
        };
        Some(text)
    }
}

/// Input and result lines driven by key presses
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: CalculatorConfig,
    sanitizer: Sanitizer,
    input: String,
    result: String,
    last_error: Option<EvalError>,
}

impl Session {
    /// Creates a session with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let sanitizer = Sanitizer::from_config(&config);
        Self {
            config,
            sanitizer,
            ..Self::default()
        }
    }

    /// Current input line
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current result line (empty until the first `=`)
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Failure behind the placeholder from the last `=`, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Applies one key press
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Delete => {
                self.input.pop();
            }
            Key::Clear => {
                self.input.clear();
                self.result.clear();
                self.last_error = None;
            }
            Key::Percent => self.percent(),
            Key::Equals => self.equals(),
            _ => {
                if let Some(text) = key.text(&self.config) {
                    self.append(&text);
                }
            }
        }
    }

    /// Applies a key by its label; unknown labels are ignored
    pub fn press_label(&mut self, label: &str) -> bool {
        match Key::from_label(label) {
            Some(key) => {
                self.press(key);
                true
            }
            None => {
                tracing::trace!(label, "ignored unknown key label");
                false
            }
        }
    }

    /// Presses each label in turn
    pub fn press_labels<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) {
        for label in labels {
            self.press_label(label);
        }
    }

    fn fits(&self, len: usize) -> bool {
        let limit = self.config.max_input_len;
        if limit > 0 && len > limit {
            tracing::trace!(limit, len, "input length limit reached");
            return false;
        }
        true
    }

    fn append(&mut self, text: &str) {
        if self.fits(self.input.chars().count() + text.chars().count()) {
            self.input.push_str(text);
        }
    }

    fn percent(&mut self) {
        if !is_number_text(&self.input) {
            return;
        }
        let Ok(value) = self.input.parse::<f64>() else {
            return;
        };
        let scaled = format_result(value / 100.0);
        if self.fits(scaled.chars().count()) {
            self.input = scaled;
        }
    }

    fn equals(&mut self) {
        let canonical = self.sanitizer.sanitize(&self.input);
        match evaluate(&canonical) {
            Ok(value) => {
                self.result = format_result(value);
                self.last_error = None;
            }
            Err(err) => {
                self.result.clone_from(&self.config.error_text);
                self.last_error = Some(err);
            }
        }
        tracing::debug!(input = %self.input, result = %self.result, "evaluated");
    }
}

/// Whether `text` is a lone number as the keypad or [`format_result`] writes it
///
/// Digits and `.` with an optional leading `-`, optionally followed by an
/// upper-case `E` exponent. Anything else (operator glyphs, `inf`, `nan`)
/// counts as an expression.
fn is_number_text(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once('E') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let mantissa_ok = mantissa.bytes().any(|b| b.is_ascii_digit())
        && mantissa.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    let exponent_ok = exponent.map_or(true, |exp| {
        let digits = exp.strip_prefix('-').unwrap_or(exp);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    });
    mantissa_ok && exponent_ok
}
