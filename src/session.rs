//! Calculation session state
//!
//! A `Session` owns everything that survives between keypad events: the
//! expression being built, the last formatted result and the log of
//! finished calculations shown on the history screen. Nothing is persisted.

use crate::eval::{CalcError, Evaluator};
use crate::format::NumberFormat;
use crate::history::{write_tokens, ExpressionHistory, Token};
use std::fmt;

/// Text shown on the history screen before anything has been calculated
pub const NO_DATA: &str = "NoData";

/// Formatted result of the last successful evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastResult {
    value: Option<String>,
    placeholder: String,
}

impl LastResult {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: None,
            placeholder: placeholder.into(),
        }
    }

    pub fn set(&mut self, formatted: String) {
        self.value = Some(formatted);
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// The result, or the placeholder when nothing was calculated yet
    pub fn as_str(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.placeholder)
    }
}

impl Default for LastResult {
    fn default() -> Self {
        Self::new(NO_DATA)
    }
}

impl fmt::Display for LastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished calculation, as listed on the history screen
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub expression: Vec<Token>,
    pub result: f64,
}

impl Calculation {
    /// Render the expression with `format` for its operands
    pub fn expression_text(&self, format: &NumberFormat) -> String {
        let mut out = String::new();
        for (i, token) in self.expression.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match token {
                Token::Number(n) => out.push_str(&format.format(*n)),
                Token::Operator(kind) => out.push_str(kind.symbol()),
            }
        }
        out
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(f, &self.expression)?;
        write!(f, " = {}", NumberFormat::default().format(self.result))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    history: ExpressionHistory,
    last_result: LastResult,
    calculations: Vec<Calculation>,
    evaluator: Evaluator,
    format: NumberFormat,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: NumberFormat, no_data: impl Into<String>) -> Self {
        Self {
            last_result: LastResult::new(no_data),
            format,
            ..Self::default()
        }
    }

    pub fn history(&self) -> &ExpressionHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ExpressionHistory {
        &mut self.history
    }

    pub fn last_result(&self) -> &LastResult {
        &self.last_result
    }

    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Evaluate the current history.
    ///
    /// On success the formatted value becomes the last result and the
    /// calculation is logged. The history is cleared either way.
    pub fn evaluate(&mut self) -> Result<f64, CalcError> {
        let outcome = self.evaluator.evaluate(&self.history);

        match outcome {
            Ok(value) => {
                self.last_result.set(self.format.format(value));
                self.calculations.push(Calculation {
                    expression: self.history.tokens().to_vec(),
                    result: value,
                });
            }
            Err(e) => {
                tracing::debug!(expression = %self.history, error = %e, "evaluation failed");
            }
        }

        self.history.clear();
        outcome
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::OperatorKind;

    #[test]
    fn last_result_starts_as_placeholder() {
        let session = Session::new();
        assert!(!session.last_result().is_set());
        assert_eq!(session.last_result().as_str(), NO_DATA);
    }

    #[test]
    fn successful_evaluation_updates_state() {
        let mut session = Session::new();
        session.history_mut().append_number(7.0);
        session.history_mut().append_operator(OperatorKind::Divide);
        session.history_mut().append_number(2.0);

        assert_eq!(session.evaluate(), Ok(3.5));
        assert!(session.history().is_empty());
        assert_eq!(session.last_result().as_str(), "3,5");
        assert_eq!(session.calculations().len(), 1);
        assert_eq!(session.calculations()[0].to_string(), "7 / 2 = 3,5");
    }

    #[test]
    fn failed_evaluation_clears_history_and_keeps_last_result() {
        let mut session = Session::new();
        session.history_mut().append_number(4.0);
        assert_eq!(session.evaluate(), Ok(4.0));

        session.history_mut().append_number(1.0);
        session.history_mut().append_operator(OperatorKind::Divide);
        session.history_mut().append_number(0.0);
        assert_eq!(session.evaluate(), Err(CalcError::DivideByZero));

        assert!(session.history().is_empty());
        assert_eq!(session.last_result().as_str(), "4");
        assert_eq!(session.calculations().len(), 1);
    }

    #[test]
    fn custom_format_and_placeholder() {
        let mut session = Session::with_format(NumberFormat::new(1), "-");
        assert_eq!(session.last_result().to_string(), "-");

        session.history_mut().append_number(1.0);
        session.history_mut().append_operator(OperatorKind::Divide);
        session.history_mut().append_number(3.0);
        session.evaluate().unwrap();
        assert_eq!(session.last_result().as_str(), "0,3");
    }

    #[test]
    fn clear_discards_pending_tokens() {
        let mut session = Session::new();
        session.history_mut().append_number(1.0);
        session.history_mut().append_operator(OperatorKind::Add);
        session.clear();
        assert!(session.history().is_empty());
        assert_eq!(session.evaluate(), Ok(0.0));
    }
}
