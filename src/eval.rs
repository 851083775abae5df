//! Left-to-right evaluator for tcalc
//!
//! The history is reduced in entry order with no operator precedence:
//! `2 + 3 x 4` is `(2 + 3) x 4 = 20`. Every operand and the final value
//! must lie inside the representable range of `f64`.

use crate::history::{ExpressionHistory, OperatorKind, Token};
use thiserror::Error;

/// Smallest positive subnormal `f64` (about 4.9e-324)
pub const MIN_POSITIVE_SUBNORMAL: f64 = 4.9406564584124654e-324;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivideByZero,
    #[error("Number out of computable range")]
    OutOfRange,
}

/// Reject values at or beyond the extremes of `f64`.
///
/// Non-zero values whose magnitude is no larger than the smallest subnormal
/// are rejected too. Zero is always accepted.
pub fn check_range(x: f64) -> Result<(), CalcError> {
    if x.is_nan()
        || x >= f64::MAX
        || x <= -f64::MAX
        || (x > 0.0 && x <= MIN_POSITIVE_SUBNORMAL)
        || (x < 0.0 && x >= -MIN_POSITIVE_SUBNORMAL)
    {
        return Err(CalcError::OutOfRange);
    }
    Ok(())
}

impl OperatorKind {
    /// Apply this operator to `a` and `b`.
    ///
    /// A zero divisor is reported before either operand is range-checked.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        if self == OperatorKind::Divide && b == 0.0 {
            return Err(CalcError::DivideByZero);
        }
        check_range(a)?;
        check_range(b)?;

        Ok(match self {
            OperatorKind::Add => a + b,
            OperatorKind::Subtract => a - b,
            OperatorKind::Multiply => a * b,
            OperatorKind::Divide => a / b,
        })
    }
}

/// Reduces an expression history to a single value
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Reduce `history` strictly left to right.
    ///
    /// An empty history, or one that does not start with a number, yields 0.
    /// The scan stops at the first position that is not an
    /// `(operator, number)` pair; anything after it is ignored.
    pub fn evaluate(&self, history: &ExpressionHistory) -> Result<f64, CalcError> {
        let tokens = history.tokens();
        let Some(Token::Number(first)) = tokens.first() else {
            return Ok(0.0);
        };

        let mut acc = *first;
        for pair in tokens[1..].chunks_exact(2) {
            let (kind, rhs) = match pair {
                [Token::Operator(kind), Token::Number(rhs)] => (*kind, *rhs),
                _ => break,
            };
            acc = kind.apply(acc, rhs)?;
        }

        check_range(acc)?;
        tracing::debug!(expression = %history, result = acc, "evaluated");
        Ok(acc)
    }
}

/// Evaluate `history` with a default evaluator
pub fn evaluate(history: &ExpressionHistory) -> Result<f64, CalcError> {
    Evaluator::new().evaluate(history)
}
