//! Display glyph to canonical symbol mapping

use crate::config::CalculatorConfig;

/// Glyphs every table understands, regardless of configuration
const FIXED_GLYPHS: [(char, char); 2] = [('×', '*'), ('÷', '/')];

/// Rewrites display glyphs into the ASCII operators the evaluator reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    table: Vec<(char, char)>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

impl Sanitizer {
    /// Creates the default table (`x`, `×` to `*`; `÷` to `/`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from the configured keypad glyphs
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        let mut table = vec![(config.multiply_glyph, '*'), (config.divide_glyph, '/')];
        for entry in FIXED_GLYPHS {
            if !table.iter().any(|(glyph, _)| *glyph == entry.0) {
                table.push(entry);
            }
        }
        Self { table }
    }

    /// Canonical symbol for `ch`, or `ch` itself
    #[must_use]
    pub fn map_char(&self, ch: char) -> char {
        self.table
            .iter()
            .find_map(|&(glyph, symbol)| (glyph == ch).then_some(symbol))
            .unwrap_or(ch)
    }

    /// Rewrites every glyph in `input`
    #[must_use]
    pub fn sanitize(&self, input: &str) -> String {
        input.chars().map(|ch| self.map_char(ch)).collect()
    }
}
