//! Locale-aware fixed-point number formatting.
//!
//! Display strings always carry exactly two fractional digits; only the
//! separator characters vary with the locale. The convention is an explicit,
//! injected configuration rather than ambient process state, so callers (and
//! tests) can pin it deterministically.

use measure_core::Real;
use serde::{Deserialize, Serialize};

/// Numeric display convention: separator characters of the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Character between the integer and fractional parts.
    pub decimal_separator: char,
    /// Optional thousands separator for the integer part.
    pub group_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: None,
        }
    }
}

impl NumberFormat {
    /// Convention with the given decimal separator and no grouping.
    pub fn new(decimal_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator: None,
        }
    }

    /// Add a thousands separator for the integer part.
    pub fn with_grouping(mut self, group_separator: char) -> Self {
        self.group_separator = Some(group_separator);
        self
    }

    /// Render `value` with exactly two fractional digits.
    ///
    /// Trailing zeros are kept (`5.0` becomes `"5.00"`). Rounding is to the
    /// nearest representable two-digit decimal of the exact binary value.
    /// Non-finite values render as their plain form (`"NaN"`, `"inf"`) and
    /// take no separators.
    pub fn format_fixed(&self, value: Real) -> String {
        let plain = format!("{value:.2}");
        let Some((mantissa, frac)) = plain.split_once('.') else {
            return plain;
        };
        let (sign, int_digits) = match mantissa.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", mantissa),
        };
        let int_part = match self.group_separator {
            Some(sep) => group_thousands(int_digits, sep),
            None => int_digits.to_string(),
        };
        format!("{sign}{int_part}{}{frac}", self.decimal_separator)
    }
}

/// Insert `sep` every three digits, counting from the right.
fn group_thousands(digits: &str, sep: char) -> String {
    let mut grouped: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(ch);
    }
    grouped.into_iter().rev().collect()
}
