//! Expression history for tcalc
//!
//! An `ExpressionHistory` is the ordered log of keypad input for one
//! calculation: numbers and operators in the order they were entered.
//! It is append-only; the only other mutation is clearing it.

use crate::format::NumberFormat;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Add,      // +
    Subtract, // -
    Multiply, // x
    Divide,   // /
}

impl OperatorKind {
    /// The keypad title of this operator
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Subtract => "-",
            OperatorKind::Multiply => "x",
            OperatorKind::Divide => "/",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// An operand
    Number(f64),
    /// A binary operator between two operands
    Operator(OperatorKind),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => f.write_str(&NumberFormat::default().format(*n)),
            Token::Operator(kind) => write!(f, "{}", kind),
        }
    }
}

/// Tokens of the calculation in progress.
///
/// Callers are expected to alternate `append_number` and `append_operator`,
/// starting with a number. Nothing here enforces that; the evaluator stops
/// at the first break in the pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionHistory {
    tokens: Vec<Token>,
}

impl ExpressionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operand. Range checking happens at evaluation, not here.
    pub fn append_number(&mut self, value: f64) {
        tracing::trace!(value, "append number");
        self.tokens.push(Token::Number(value));
    }

    pub fn append_operator(&mut self, kind: OperatorKind) {
        tracing::trace!(operator = %kind, "append operator");
        self.tokens.push(Token::Operator(kind));
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl FromIterator<Token> for ExpressionHistory {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ExpressionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, &self.tokens)
    }
}

/// Write tokens separated by single spaces
pub(crate) fn write_tokens(f: &mut fmt::Formatter<'_>, tokens: &[Token]) -> fmt::Result {
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", token)?;
    }
    Ok(())
}
