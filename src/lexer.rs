//! Tokenization of typed keypad input
//!
//! Each character of a line stands for one button on the keypad:
//! `12,5 x 4 =` presses `1`, `2`, `,`, `5`, `x`, `4` and `=`.

use crate::history::OperatorKind;
use nom::{
    branch::alt,
    character::complete::{multispace0, one_of, satisfy},
    combinator::{map, value},
    multi::many0,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit button, 0-9
    Digit(char),
    /// The decimal comma button
    Comma,
    /// An operator button
    Operator(OperatorKind),
    /// =
    Equals,
    /// C
    Clear,
}

#[derive(Error, Debug, PartialEq)]
pub enum LexError {
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Parse a digit button
fn digit(input: &str) -> IResult<&str, Key> {
    map(satisfy(|c| c.is_ascii_digit()), Key::Digit)(input)
}

/// Parse the comma button
fn comma(input: &str) -> IResult<&str, Key> {
    value(Key::Comma, one_of(","))(input)
}

fn add_op(input: &str) -> IResult<&str, Key> {
    value(Key::Operator(OperatorKind::Add), one_of("+"))(input)
}

fn subtract_op(input: &str) -> IResult<&str, Key> {
    value(Key::Operator(OperatorKind::Subtract), one_of("-−"))(input)
}

/// `x` is the keypad title; `*` and `×` are accepted as well
fn multiply_op(input: &str) -> IResult<&str, Key> {
    value(Key::Operator(OperatorKind::Multiply), one_of("xX*×"))(input)
}

fn divide_op(input: &str) -> IResult<&str, Key> {
    value(Key::Operator(OperatorKind::Divide), one_of("/÷"))(input)
}

fn equals(input: &str) -> IResult<&str, Key> {
    value(Key::Equals, one_of("="))(input)
}

fn clear(input: &str) -> IResult<&str, Key> {
    value(Key::Clear, one_of("Cc"))(input)
}

/// Parse any single key
fn key(input: &str) -> IResult<&str, Key> {
    preceded(
        multispace0,
        alt((
            digit,
            comma,
            add_op,
            subtract_op,
            multiply_op,
            divide_op,
            equals,
            clear,
        )),
    )(input)
}

/// Tokenize a complete input line into key presses
pub fn lex(input: &str) -> Result<Vec<Key>, LexError> {
    let (remaining, keys) =
        many0(key)(input).map_err(|e| LexError::ParseError(format!("{:?}", e)))?;

    let remaining = remaining.trim_start();
    if let Some(c) = remaining.chars().next() {
        return Err(LexError::UnexpectedChar(c));
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_digits_and_comma() {
        let keys = lex("12,5").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('1'),
                Key::Digit('2'),
                Key::Comma,
                Key::Digit('5'),
            ]
        );
    }

    #[test]
    fn tokenize_expression_with_spaces() {
        let keys = lex(" 2 + 3 x 4 = ").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('2'),
                Key::Operator(OperatorKind::Add),
                Key::Digit('3'),
                Key::Operator(OperatorKind::Multiply),
                Key::Digit('4'),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn tokenize_operator_aliases() {
        let keys = lex("*×/÷-").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Operator(OperatorKind::Multiply),
                Key::Operator(OperatorKind::Multiply),
                Key::Operator(OperatorKind::Divide),
                Key::Operator(OperatorKind::Divide),
                Key::Operator(OperatorKind::Subtract),
            ]
        );
    }

    #[test]
    fn tokenize_clear() {
        assert_eq!(lex("C c").unwrap(), vec![Key::Clear, Key::Clear]);
    }

    #[test]
    fn tokenize_empty_line() {
        assert_eq!(lex("").unwrap(), vec![]);
        assert_eq!(lex("   ").unwrap(), vec![]);
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(lex("2 + a"), Err(LexError::UnexpectedChar('a')));
        assert_eq!(lex("3.5"), Err(LexError::UnexpectedChar('.')));
    }
}
