//! Lazy tokenizer over canonical expression text

use crate::core::{EvalError, EvalResult, Operator};

/// Token types from lexical analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator
    Operator(Operator),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

/// Tokenizer for converting expression strings to tokens
///
/// Produces one token per call so the evaluator can fail on structure before
/// it has looked at the rest of the input.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> EvalResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None at end of input
    pub fn next_token(&mut self) -> EvalResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => return self.read_number().map(Some),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '+' | '-' | '*' | '/' => Token::Operator(Operator::try_from(ch)?),
            other => {
                self.advance();
                return Err(EvalError::InvalidCharacter(other));
            }
        };
        self.advance();

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn read_number(&mut self) -> EvalResult<Token> {
        let start = self.pos;
        let mut dots = 0usize;

        while let Some(ch) = self.current_char() {
            match ch {
                '0'..='9' => {}
                '.' => dots += 1,
                _ => break,
            }
            self.advance();
        }

        let literal = &self.input[start..self.pos];
        if dots > 1 || literal.len() == dots {
            return Err(EvalError::InvalidNumberLiteral(literal.to_string()));
        }

        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvalError::InvalidNumberLiteral(literal.to_string()))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = EvalResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
