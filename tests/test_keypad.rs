#[path = "common/mod.rs"]
mod common;
use common::keypad;
use tcalc::{calculate, Messages};

#[test]
fn test_left_to_right() { assert_eq!(calculate("2+3x4=").unwrap(), "20"); }
#[test]
fn test_decimal_comma_result() { assert_eq!(calculate("7/2=").unwrap(), "3,5"); }
#[test]
fn test_decimal_comma_input() { assert_eq!(calculate("5,5+1=").unwrap(), "6,5"); }
#[test]
fn test_rounded_result() { assert_eq!(calculate("1/3=").unwrap(), "0,333"); }
#[test]
fn test_no_grouping() { assert_eq!(calculate("1000x1000=").unwrap(), "1000000"); }
#[test]
fn test_negative_result() { assert_eq!(calculate("2-5=").unwrap(), "-3"); }
#[test]
fn test_equals_alone() { assert_eq!(calculate("=").unwrap(), "0"); }

#[test]
fn test_division_by_zero_message() {
    assert_eq!(calculate("10/0=").unwrap(), Messages::default().error);
}

#[test]
fn test_out_of_range_message() {
    // 10^300 x 10^300 overflows f64
    let input = format!("1{}x1{}=", "0".repeat(300), "0".repeat(300));
    assert_eq!(calculate(&input).unwrap(), Messages::default().out_of_range);
}

#[test]
fn test_chain_from_negative_result() {
    assert_eq!(calculate("2-5=x2=").unwrap(), "-6");
}

#[test]
fn test_operator_after_error_message() {
    // The message is not a number, so only the operator reaches the history
    // and evaluation of a history starting with an operator gives 0.
    assert_eq!(calculate("1/0=+2=").unwrap(), "0");
}

#[test]
fn test_history_screen_log() {
    let kp = keypad("2+2=3x3=1/0=");
    let calcs = kp.session().calculations();
    assert_eq!(calcs.len(), 2);
    assert_eq!(calcs[0].to_string(), "2 + 2 = 4");
    assert_eq!(calcs[1].to_string(), "3 x 3 = 9");
    assert_eq!(kp.open_history(), "9");
}

#[test]
fn test_clear_mid_entry() {
    let kp = keypad("9x9C");
    assert_eq!(kp.label(), "0");
    assert!(kp.session().history().is_empty());
}

#[test]
fn test_lex_error() {
    assert!(calculate("2+y").is_err());
}
