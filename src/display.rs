//! Rendering of the history screen
//!
//! The history screen lists finished calculations under a date header.

use crate::format::NumberFormat;
use crate::session::{Calculation, LastResult};
use chrono::NaiveDate;

/// Header date format, e.g. `25.01.2024`
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format the calculation log for a terminal `width` columns wide.
///
/// Each row is the expression followed by `= result`, with the result
/// pushed to the right edge when there is room.
pub fn format_history(
    calculations: &[Calculation],
    date: NaiveDate,
    format: &NumberFormat,
    width: usize,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("\x1b[1m{}\x1b[0m\n", date.format(DATE_FORMAT)));

    if calculations.is_empty() {
        out.push_str("\x1b[90m(no calculations)\x1b[0m");
        return out;
    }

    let rows: Vec<String> = calculations
        .iter()
        .map(|calc| format_row(calc, format, width))
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

fn format_row(calc: &Calculation, format: &NumberFormat, width: usize) -> String {
    let expression = calc.expression_text(format);
    let result = format!("= {}", format.format(calc.result));

    let used = expression.chars().count() + result.chars().count();
    let padding = width.saturating_sub(used).max(1);
    format!("{}{}{}", expression, " ".repeat(padding), result)
}

/// Format the bare last result handed to the history screen
pub fn format_last_result(last: &LastResult) -> String {
    last.as_str().to_string()
}
