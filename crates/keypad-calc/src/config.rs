//! Calculator configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed or produced
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but are not usable
    #[error("Invalid config: {message}")]
    Invalid {
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid-config error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Keypad and display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Text shown in place of a result for every failure kind
    pub error_text: String,
    /// Glyph the keypad appends for multiplication
    pub multiply_glyph: char,
    /// Glyph the keypad appends for division
    pub divide_glyph: char,
    /// Maximum input length in characters (0 = unlimited)
    pub max_input_len: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_text: "Error".to_string(),
            multiply_glyph: 'x',
            divide_glyph: '÷',
            max_input_len: 0,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure placeholder
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Set the multiplication glyph
    #[must_use]
    pub const fn with_multiply_glyph(mut self, glyph: char) -> Self {
        self.multiply_glyph = glyph;
        self
    }

    /// Set the division glyph
    #[must_use]
    pub const fn with_divide_glyph(mut self, glyph: char) -> Self {
        self.divide_glyph = glyph;
        self
    }

    /// Set the maximum input length
    #[must_use]
    pub const fn with_max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    /// Parse and validate configuration from JSON
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to pretty JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the glyphs and placeholder are usable
    pub fn validate(&self) -> ConfigResult<()> {
        if self.error_text.trim().is_empty() {
            return Err(ConfigError::invalid("error_text must not be empty"));
        }
        for (name, glyph) in [
            ("multiply_glyph", self.multiply_glyph),
            ("divide_glyph", self.divide_glyph),
        ] {
            if is_reserved(glyph) {
                return Err(ConfigError::invalid(format!(
                    "{name} '{glyph}' collides with expression syntax"
                )));
            }
        }
        if self.multiply_glyph == self.divide_glyph {
            return Err(ConfigError::invalid(
                "multiply_glyph and divide_glyph must differ",
            ));
        }
        Ok(())
    }
}

/// Characters that already mean something to the evaluator or to number text
fn is_reserved(glyph: char) -> bool {
    glyph.is_ascii_digit()
        || glyph.is_whitespace()
        || matches!(glyph, '.' | '(' | ')' | '+' | '-' | '*' | '/' | 'e' | 'E')
}
