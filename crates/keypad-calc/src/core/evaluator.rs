//! Two-stack expression evaluator
//!
//! Single left-to-right scan in the shunting-yard style: operands and pending
//! operators live on two stacks and are reduced as soon as precedence allows.
//! No syntax tree is built.

use crate::core::tokenizer::{Token, Tokenizer};
use crate::core::{has_precedence, EvalError, EvalResult, Operator, StackEntry};

/// Evaluates a canonical expression (`+ - * /`, parentheses, decimals)
///
/// # Examples
///
/// ```
/// use keypad_calc::core::evaluator::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert!(evaluate("3/0").is_err());
/// ```
#[tracing::instrument(level = "debug", fields(input_len = expression.len()))]
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let result = Stacks::default().run(Tokenizer::new(expression));
    if let Err(err) = &result {
        tracing::debug!(kind = err.kind(), %err, "evaluation failed");
    }
    result
}

/// Operand and operator stacks for one evaluation
#[derive(Debug, Default)]
struct Stacks {
    operands: Vec<f64>,
    operators: Vec<StackEntry>,
}

impl Stacks {
    fn run(mut self, tokens: Tokenizer<'_>) -> EvalResult<f64> {
        for token in tokens {
            match token? {
                Token::Number(value) => self.operands.push(value),
                Token::LeftParen => self.operators.push(StackEntry::LeftParen),
                Token::RightParen => self.close_paren()?,
                Token::Operator(incoming) => self.push_operator(incoming)?,
            }
        }

        while let Some(entry) = self.operators.pop() {
            self.apply(entry)?;
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::MalformedExpression),
        }
    }

    fn close_paren(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(StackEntry::LeftParen) => return Ok(()),
                Some(entry) => self.apply(entry)?,
                None => return Err(EvalError::UnbalancedParentheses),
            }
        }
    }

    fn push_operator(&mut self, incoming: Operator) -> EvalResult<()> {
        while let Some(&top) = self.operators.last() {
            if !has_precedence(incoming, top) {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }
        self.operators.push(StackEntry::Operator(incoming));
        Ok(())
    }

    fn apply(&mut self, entry: StackEntry) -> EvalResult<()> {
        let StackEntry::Operator(op) = entry else {
            return Err(EvalError::UnbalancedParentheses);
        };
        // right operand was pushed last
        let b = self.pop_operand()?;
        let a = self.pop_operand()?;
        let value = op.apply(a, b)?;
        tracing::trace!(%op, a, b, value, "reduced");
        self.operands.push(value);
        Ok(())
    }

    fn pop_operand(&mut self) -> EvalResult<f64> {
        self.operands.pop().ok_or(EvalError::MalformedExpression)
    }
}
