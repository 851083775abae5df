//! tcalc - a four-function keypad calculator
//!
//! # Overview
//!
//! Keypad input is collected into an [`ExpressionHistory`] of numbers and
//! operators. Pressing `=` reduces the history strictly left to right, with
//! no operator precedence:
//!
//! ```text
//! 2 + 3 x 4 =          # (2 + 3) x 4 -> 20
//! 7 / 2 =              # 3,5
//! 10 / 0 =             # Ошибка
//! ```
//!
//! Results use a decimal comma and no digit grouping. Operands and results
//! must stay inside the finite range of `f64`; anything at `f64::MAX` or
//! beyond, or non-zero but no larger than the smallest subnormal, fails
//! with [`CalcError::OutOfRange`].
//!
//! # Example
//!
//! ```rust
//! use tcalc::{evaluate, ExpressionHistory, OperatorKind};
//!
//! let mut history = ExpressionHistory::new();
//! history.append_number(2.0);
//! history.append_operator(OperatorKind::Add);
//! history.append_number(3.0);
//! history.append_operator(OperatorKind::Multiply);
//! history.append_number(4.0);
//! assert_eq!(evaluate(&history), Ok(20.0));
//! ```

pub mod config;
pub mod display;
pub mod eval;
pub mod format;
pub mod history;
pub mod keypad;
pub mod lexer;
pub mod session;

// Re-export commonly used items
pub use config::{Config, ConfigError};
pub use eval::{check_range, evaluate, CalcError, Evaluator, MIN_POSITIVE_SUBNORMAL};
pub use format::NumberFormat;
pub use history::{ExpressionHistory, OperatorKind, Token};
pub use keypad::{Keypad, Messages};
pub use lexer::{lex, Key, LexError};
pub use session::{Calculation, LastResult, Session};

/// Press the keys in `input` on a fresh keypad and return the display text
pub fn calculate(input: &str) -> Result<String, LexError> {
    let keys = lex(input)?;
    let mut keypad = Keypad::default();
    keypad.press_all(keys);
    Ok(keypad.label().to_string())
}
