//! Common test utilities for tcalc integration tests

#[allow(unused_imports)]
pub use tcalc::{evaluate, lex, CalcError, ExpressionHistory, Keypad, OperatorKind, Token};

/// Build a history from a compact description: numbers and `+ - x /`
#[allow(dead_code)]
pub fn history(items: &[&str]) -> ExpressionHistory {
    items
        .iter()
        .map(|item| match *item {
            "+" => Token::Operator(OperatorKind::Add),
            "-" => Token::Operator(OperatorKind::Subtract),
            "x" => Token::Operator(OperatorKind::Multiply),
            "/" => Token::Operator(OperatorKind::Divide),
            n => Token::Number(n.parse().unwrap()),
        })
        .collect()
}

/// Press `input` on a fresh keypad and return it for inspection
#[allow(dead_code)]
pub fn keypad(input: &str) -> Keypad {
    let mut keypad = Keypad::default();
    keypad.press_all(lex(input).unwrap());
    keypad
}
