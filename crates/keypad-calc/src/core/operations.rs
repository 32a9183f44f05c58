//! Binary operators and their precedence rule

use crate::core::{EvalError, EvalResult};

/// The four supported binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators, lowest precedence first
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Canonical ASCII symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Binding strength (higher binds tighter)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Computes `a <op> b`
    ///
    /// Division by zero (either sign) is an error rather than an infinity.
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(symbol: char) -> EvalResult<Self> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(EvalError::UnsupportedOperator(other)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Entry on the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEntry {
    /// Pending `(`
    LeftParen,
    /// Pending operator
    Operator(Operator),
}

/// Applies the operator named by `symbol` to `a` and `b`
///
/// Character-level counterpart of [`Operator::apply`] for callers holding raw
/// symbols.
pub fn apply_symbol(symbol: char, a: f64, b: f64) -> EvalResult<f64> {
    Operator::try_from(symbol)?.apply(a, b)
}

/// Whether `stack_top` must be applied before `incoming` is pushed
///
/// Never pops across a parenthesis. Otherwise pops unless a lower-tier top
/// meets a higher-tier incoming operator, so equal tiers associate left.
#[must_use]
pub fn has_precedence(incoming: Operator, stack_top: StackEntry) -> bool {
    match stack_top {
        StackEntry::LeftParen => false,
        StackEntry::Operator(top) => top.precedence() >= incoming.precedence(),
    }
}
