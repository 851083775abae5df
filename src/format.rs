//! Decimal-comma number formatting
//!
//! Results are shown and logged the way a Russian-locale decimal formatter
//! shows them: `,` between the integer and fractional parts and no
//! thousands grouping.

pub const DECIMAL_SEPARATOR: char = ',';

/// Fractional digits kept by the platform decimal style
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }
}

impl NumberFormat {
    pub fn new(max_fraction_digits: usize) -> Self {
        Self { max_fraction_digits }
    }

    /// Format `value` for display: `3.5` -> `"3,5"`, `1000000.0` -> `"1000000"`
    pub fn format(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.max_fraction_digits, value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };

        // -0.0 and tiny negatives that round away
        if trimmed == "-0" {
            return "0".to_string();
        }
        trimmed.replace('.', &DECIMAL_SEPARATOR.to_string())
    }

    /// Parse display text back into a number.
    ///
    /// Only an optional leading `-`, ASCII digits and at most one `,` are
    /// accepted, so error messages and other labels yield `None`.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        let unsigned = text.strip_prefix('-').unwrap_or(text);

        let mut separators = 0;
        let mut digits = 0;
        for c in unsigned.chars() {
            match c {
                '0'..='9' => digits += 1,
                DECIMAL_SEPARATOR => separators += 1,
                _ => return None,
            }
        }
        if digits == 0 || separators > 1 {
            return None;
        }

        text.replace(DECIMAL_SEPARATOR, ".").parse().ok()
    }
}
