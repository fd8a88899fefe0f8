//! Numeric input and display formatting
//!
//! Conversions run on plain `f64`. This module owns the two edges where
//! numbers meet text: parsing what a user typed, and rendering a result.

use thiserror::Error;

/// Error type for number parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Value is not finite: {0}")]
    NotFinite(String),
}

/// Decimal places used when rendering a result
pub const DEFAULT_DECIMALS: usize = 6;

/// Largest decimal count accepted for display
pub const MAX_DECIMALS: usize = 15;

/// Parse free-text numeric input the way an entry field sees it.
///
/// Partial entries (empty, `-`, `+`, `.`, `-.`) read as `0.0` so a field
/// that is mid-edit still yields a result. Anything else must be a finite
/// decimal or scientific literal.
pub fn parse_input(s: &str) -> Result<f64, NumberError> {
    let s = s.trim();

    if matches!(s, "" | "-" | "+" | "." | "-." | "+.") {
        return Ok(0.0);
    }

    parse_number(s)
}

/// Strict parse: the string must be a finite number
pub fn parse_number(s: &str) -> Result<f64, NumberError> {
    let s = s.trim();

    // Rust accepts "inf" and "NaN"; user input should not
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return Err(NumberError::ParseError(s.to_string()));
    }

    let value: f64 = s.parse()
        .map_err(|_| NumberError::ParseError(s.to_string()))?;

    if !value.is_finite() {
        return Err(NumberError::NotFinite(s.to_string()));
    }

    Ok(value)
}

/// Render a value with a fixed number of decimals, trailing zeros and
/// a dangling decimal point removed.
///
/// `format_result(5280.0, 6)` → `"5280"`, `format_result(0.1 + 0.2, 6)` → `"0.3"`.
pub fn format_result(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let mut text = format!("{:.*}", decimals, value);

    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }

    // Tiny negatives round to "-0"
    if text == "-0" {
        text = "0".to_string();
    }

    text
}
