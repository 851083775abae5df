//! Keypad state machine
//!
//! The keypad owns the display label, which doubles as the pending-input
//! buffer. Operator and equals presses flush the label into the session's
//! expression history as a number before acting.

use crate::eval::CalcError;
use crate::format::{NumberFormat, DECIMAL_SEPARATOR};
use crate::history::OperatorKind;
use crate::lexer::Key;
use crate::session::{Session, NO_DATA};

const INITIAL_LABEL: &str = "0";

/// Texts shown in place of a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Shown for division by zero and any other failure
    pub error: String,
    /// Shown when an operand or the result leaves the computable range
    pub out_of_range: String,
    /// Handed to the history screen before the first result
    pub no_data: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            error: "Ошибка".to_string(),
            out_of_range: "Число за пределами вычислений".to_string(),
            no_data: NO_DATA.to_string(),
        }
    }
}

impl Messages {
    pub fn for_error(&self, error: CalcError) -> &str {
        match error {
            CalcError::OutOfRange => &self.out_of_range,
            _ => &self.error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Keypad {
    label: String,
    calculation_ended: bool,
    session: Session,
    messages: Messages,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(NumberFormat::default(), Messages::default())
    }
}

impl Keypad {
    pub fn new(format: NumberFormat, messages: Messages) -> Self {
        Self {
            label: INITIAL_LABEL.to_string(),
            calculation_ended: false,
            session: Session::with_format(format, messages.no_data.clone()),
            messages,
        }
    }

    /// Current display text
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the label shows a result or error from the last `=`
    pub fn calculation_ended(&self) -> bool {
        self.calculation_ended
    }

    pub fn press(&mut self, key: Key) {
        tracing::trace!(?key, label = %self.label, "key pressed");
        match key {
            Key::Digit(d) => self.on_digit(d),
            Key::Comma => self.on_comma(),
            Key::Operator(kind) => self.on_operator(kind),
            Key::Equals => self.on_equals(),
            Key::Clear => self.on_clear(),
        }
    }

    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    pub fn on_digit(&mut self, digit: char) {
        if self.label == INITIAL_LABEL || self.calculation_ended {
            self.label = digit.to_string();
            self.calculation_ended = false;
        } else {
            self.label.push(digit);
        }
    }

    pub fn on_comma(&mut self) {
        if self.calculation_ended || self.label == INITIAL_LABEL {
            self.label = format!("{}{}", INITIAL_LABEL, DECIMAL_SEPARATOR);
            self.calculation_ended = false;
        } else if !self.label.contains(DECIMAL_SEPARATOR) {
            self.label.push(DECIMAL_SEPARATOR);
        }
    }

    pub fn on_operator(&mut self, kind: OperatorKind) {
        self.flush_label();
        self.session.history_mut().append_operator(kind);
        self.reset_label();
    }

    pub fn on_equals(&mut self) {
        self.flush_label();

        self.label = match self.session.evaluate() {
            Ok(value) => self.session.format().format(value),
            Err(e) => self.messages.for_error(e).to_string(),
        };
        self.calculation_ended = true;
    }

    pub fn on_clear(&mut self) {
        self.session.clear();
        self.reset_label();
    }

    /// The last result, as passed to the history screen
    pub fn open_history(&self) -> &str {
        self.session.last_result().as_str()
    }

    /// Append the label to the history if it holds a number
    fn flush_label(&mut self) {
        match self.session.format().parse(&self.label) {
            Some(value) => self.session.history_mut().append_number(value),
            None => tracing::debug!(label = %self.label, "label is not a number, nothing appended"),
        }
    }

    fn reset_label(&mut self) {
        self.label = INITIAL_LABEL.to_string();
    }
}
